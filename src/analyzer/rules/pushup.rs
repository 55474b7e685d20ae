//! Push-up rubric: body line, elbow bend, and range of motion.

use super::{Bound, Check, Metric, Rubric, Tier};
use crate::{Exercise, Landmark};

const CHECKS: &[Check] = &[
    Check {
        id: "pushup-body-alignment",
        name: "Body alignment",
        metric: Metric::Angle(Landmark::LeftShoulder, Landmark::LeftHip, Landmark::LeftAnkle),
        tiers: &[Tier {
            bound: Bound::AtLeast(170.0),
            points: 40,
            feedback: "Perfect body alignment!",
        }],
        correction: "Maintain straight line from head to heels",
    },
    Check {
        id: "pushup-elbow-angle",
        name: "Elbow angle",
        metric: Metric::Angle(Landmark::LeftShoulder, Landmark::LeftElbow, Landmark::LeftWrist),
        tiers: &[Tier {
            bound: Bound::Between(45.0, 90.0),
            points: 30,
            feedback: "Good elbow position!",
        }],
        correction: "Keep elbows at 45-degree angle to body",
    },
    Check {
        id: "pushup-range-of-motion",
        name: "Range of motion",
        metric: Metric::VerticalDistance(Landmark::LeftShoulder, Landmark::LeftWrist),
        tiers: &[Tier {
            bound: Bound::Above(50.0),
            points: 30,
            feedback: "Good range of motion!",
        }],
        correction: "Lower your chest closer to the ground",
    },
];

/// Rubric for push-ups
pub struct PushupRubric;

impl PushupRubric {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PushupRubric {
    fn default() -> Self {
        Self::new()
    }
}

impl Rubric for PushupRubric {
    fn exercise(&self) -> Exercise {
        Exercise::Pushup
    }

    fn checks(&self) -> &'static [Check] {
        CHECKS
    }
}
