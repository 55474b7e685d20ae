//! Per-exercise scoring rubrics

pub mod plank;
pub mod pushup;
pub mod squat;

pub use plank::PlankRubric;
pub use pushup::PushupRubric;
pub use squat::SquatRubric;

use super::geometry::{angle, horizontal_distance, vertical_distance};
use crate::{CheckOutcome, Exercise, Landmark, Pose};

/// Trait for exercise rubrics
pub trait Rubric: Send + Sync {
    /// Exercise this rubric scores
    fn exercise(&self) -> Exercise;

    /// Checks in evaluation order
    fn checks(&self) -> &'static [Check];

    /// Evaluate every check against a pose, in order
    fn evaluate(&self, pose: &Pose) -> Vec<CheckOutcome> {
        self.checks().iter().map(|check| check.evaluate(pose)).collect()
    }
}

/// Rubric for an exercise, or None when the exercise has no rubric
pub fn rubric_for(exercise: &Exercise) -> Option<&'static dyn Rubric> {
    match exercise {
        Exercise::Squat => Some(&SquatRubric),
        Exercise::Pushup => Some(&PushupRubric),
        Exercise::Plank => Some(&PlankRubric),
        Exercise::Unsupported(_) => None,
    }
}

/// Geometric quantity a check reads from the pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Angle at the middle landmark
    Angle(Landmark, Landmark, Landmark),
    /// |a.x - b.x|
    HorizontalDistance(Landmark, Landmark),
    /// |a.y - b.y|
    VerticalDistance(Landmark, Landmark),
    /// Nothing is measured
    Unmeasured,
}

impl Metric {
    pub fn measure(&self, pose: &Pose) -> Option<f64> {
        match *self {
            Metric::Angle(a, b, c) => Some(angle(pose.get(a), pose.get(b), pose.get(c))),
            Metric::HorizontalDistance(a, b) => {
                Some(horizontal_distance(pose.get(a), pose.get(b)))
            }
            Metric::VerticalDistance(a, b) => Some(vertical_distance(pose.get(a), pose.get(b))),
            Metric::Unmeasured => None,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Angle(..) => "°",
            Metric::HorizontalDistance(..) | Metric::VerticalDistance(..) => "px",
            Metric::Unmeasured => "",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Metric::Angle(a, b, c) => format!("angle {} / {} / {}", a, b, c),
            Metric::HorizontalDistance(a, b) => format!("horizontal {} to {}", a, b),
            Metric::VerticalDistance(a, b) => format!("vertical {} to {}", a, b),
            Metric::Unmeasured => "unmeasured".to_string(),
        }
    }
}

/// Passing condition on a measured value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value <= limit
    AtMost(f64),
    /// value >= limit
    AtLeast(f64),
    /// value < limit
    Below(f64),
    /// value > limit
    Above(f64),
    /// low <= value <= high
    Between(f64, f64),
    /// Passes without a measurement
    Always,
}

impl Bound {
    /// Whether a measurement satisfies the bound. Missing or non-finite
    /// values only satisfy `Always`.
    pub fn admits(&self, value: Option<f64>) -> bool {
        if let Bound::Always = self {
            return true;
        }
        let Some(v) = value.filter(|v| v.is_finite()) else {
            return false;
        };
        match *self {
            Bound::AtMost(limit) => v <= limit,
            Bound::AtLeast(limit) => v >= limit,
            Bound::Below(limit) => v < limit,
            Bound::Above(limit) => v > limit,
            Bound::Between(low, high) => (low..=high).contains(&v),
            Bound::Always => true,
        }
    }
}

/// One passing band of a check: the first tier that admits the value wins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub bound: Bound,
    pub points: u8,
    pub feedback: &'static str,
}

/// A single scoring rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    /// Stable id (kebab-case)
    pub id: &'static str,
    pub name: &'static str,
    pub metric: Metric,
    /// Passing tiers, best first
    pub tiers: &'static [Tier],
    /// Message when no tier admits the value
    pub correction: &'static str,
}

impl Check {
    /// Best attainable points
    pub fn max_points(&self) -> u8 {
        self.tiers.iter().map(|t| t.points).max().unwrap_or(0)
    }

    pub fn evaluate(&self, pose: &Pose) -> CheckOutcome {
        let value = self.metric.measure(pose);
        let tier = self.tiers.iter().find(|t| t.bound.admits(value));

        CheckOutcome {
            check: self.id,
            name: self.name,
            metric: self.metric.describe(),
            value,
            unit: self.metric.unit(),
            passed: tier.is_some(),
            points: tier.map(|t| t.points).unwrap_or(0),
            max_points: self.max_points(),
            message: tier.map(|t| t.feedback).unwrap_or(self.correction),
        }
    }
}
