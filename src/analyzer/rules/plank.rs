//! Plank rubric: hip line, shoulder stacking, and a fixed core bonus.

use super::{Bound, Check, Metric, Rubric, Tier};
use crate::{Exercise, Landmark};

const CHECKS: &[Check] = &[
    Check {
        id: "plank-hip-alignment",
        name: "Hip alignment",
        metric: Metric::Angle(Landmark::LeftShoulder, Landmark::LeftHip, Landmark::LeftAnkle),
        tiers: &[
            Tier {
                bound: Bound::Between(170.0, 180.0),
                points: 50,
                feedback: "Perfect hip alignment!",
            },
            Tier {
                bound: Bound::AtLeast(160.0),
                points: 35,
                feedback: "Good hip position",
            },
        ],
        correction: "Keep hips in line with shoulders and ankles",
    },
    Check {
        id: "plank-shoulder-over-elbow",
        name: "Shoulder over elbow",
        metric: Metric::HorizontalDistance(Landmark::LeftShoulder, Landmark::LeftElbow),
        tiers: &[Tier {
            bound: Bound::Below(20.0),
            points: 25,
            feedback: "Great shoulder position!",
        }],
        correction: "Position shoulders directly over elbows",
    },
    // Fixed bonus: there is no measurable core-stability signal in a single frame.
    Check {
        id: "plank-core-stability",
        name: "Core stability",
        metric: Metric::Unmeasured,
        tiers: &[Tier {
            bound: Bound::Always,
            points: 25,
            feedback: "Maintain this position with engaged core",
        }],
        correction: "Maintain this position with engaged core",
    },
];

/// Rubric for forearm planks
pub struct PlankRubric;

impl PlankRubric {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlankRubric {
    fn default() -> Self {
        Self::new()
    }
}

impl Rubric for PlankRubric {
    fn exercise(&self) -> Exercise {
        Exercise::Plank
    }

    fn checks(&self) -> &'static [Check] {
        CHECKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Keypoint, Pose};

    fn flat_plank() -> Pose {
        Pose::default()
            .with(Landmark::LeftShoulder, Keypoint::new(100.0, 100.0))
            .with(Landmark::LeftElbow, Keypoint::new(105.0, 140.0))
            .with(Landmark::LeftHip, Keypoint::new(200.0, 100.0))
            .with(Landmark::LeftAnkle, Keypoint::new(300.0, 100.0))
    }

    #[test]
    fn test_flat_plank_scores_full_points() {
        let outcomes = PlankRubric::new().evaluate(&flat_plank());
        let points: Vec<u8> = outcomes.iter().map(|o| o.points).collect();
        assert_eq!(points, vec![50, 25, 25]);
    }

    #[test]
    fn test_slightly_raised_hips_get_second_tier() {
        // ~165 degrees at the hip
        let pose = flat_plank().with(Landmark::LeftHip, Keypoint::new(200.0, 87.0));
        let outcome = PlankRubric::new().evaluate(&pose).remove(0);
        assert!(outcome.passed);
        assert_eq!(outcome.points, 35);
        assert_eq!(outcome.message, "Good hip position");
    }

    #[test]
    fn test_piked_hips_fail() {
        let pose = flat_plank().with(Landmark::LeftHip, Keypoint::new(200.0, 60.0));
        let outcome = PlankRubric::new().evaluate(&pose).remove(0);
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Keep hips in line with shoulders and ankles");
    }

    #[test]
    fn test_shoulders_ahead_of_elbows_fail() {
        let pose = flat_plank().with(Landmark::LeftElbow, Keypoint::new(130.0, 140.0));
        let outcome = PlankRubric::new().evaluate(&pose).remove(1);
        assert!(!outcome.passed);
        assert_eq!(outcome.value, Some(30.0));
    }

    #[test]
    fn test_core_bonus_is_unmeasured_and_always_awarded() {
        let outcome = PlankRubric::new().evaluate(&Pose::default()).remove(2);
        assert!(outcome.passed);
        assert_eq!(outcome.points, 25);
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.metric, "unmeasured");
    }
}
