//! Squat rubric: depth, back posture, and knee tracking.

use super::{Bound, Check, Metric, Rubric, Tier};
use crate::{Exercise, Landmark};

const CHECKS: &[Check] = &[
    Check {
        id: "squat-depth",
        name: "Squat depth",
        metric: Metric::Angle(Landmark::LeftHip, Landmark::LeftKnee, Landmark::LeftAnkle),
        tiers: &[
            Tier {
                bound: Bound::AtMost(90.0),
                points: 35,
                feedback: "Excellent squat depth achieved!",
            },
            Tier {
                bound: Bound::AtMost(110.0),
                points: 25,
                feedback: "Good squat depth",
            },
        ],
        correction: "Go deeper - aim for thighs parallel to ground",
    },
    Check {
        id: "squat-back-posture",
        name: "Back posture",
        metric: Metric::Angle(Landmark::LeftShoulder, Landmark::LeftHip, Landmark::LeftKnee),
        tiers: &[Tier {
            bound: Bound::AtLeast(160.0),
            points: 30,
            feedback: "Great back posture maintained!",
        }],
        correction: "Keep your chest up and back straight",
    },
    Check {
        id: "squat-knee-alignment",
        name: "Knee alignment",
        metric: Metric::HorizontalDistance(Landmark::LeftKnee, Landmark::RightKnee),
        tiers: &[Tier {
            bound: Bound::Below(30.0),
            points: 35,
            feedback: "Good knee alignment!",
        }],
        correction: "Keep knees aligned with toes",
    },
];

/// Rubric for squats
pub struct SquatRubric;

impl SquatRubric {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SquatRubric {
    fn default() -> Self {
        Self::new()
    }
}

impl Rubric for SquatRubric {
    fn exercise(&self) -> Exercise {
        Exercise::Squat
    }

    fn checks(&self) -> &'static [Check] {
        CHECKS
    }
}
