//! Result aggregation for rubric checks

use crate::{AnalysisResult, CheckOutcome, Rating};

/// Upper bound of every form score
pub const MAX_SCORE: u32 = 100;

/// Correction returned for exercises without a rubric
pub const NO_RUBRIC_CORRECTION: &str = "No analysis rubric defined for this exercise";

/// Folds check outcomes into a scored result
pub struct ResultAggregator;

impl ResultAggregator {
    /// Sum passed points (clamped to 0-100) and split messages into
    /// feedback and corrections, keeping evaluation order in each list.
    pub fn aggregate(outcomes: &[CheckOutcome]) -> AnalysisResult {
        let mut total: u32 = 0;
        let mut feedback = Vec::new();
        let mut corrections = Vec::new();

        for outcome in outcomes {
            if outcome.passed {
                total += outcome.points as u32;
                feedback.push(outcome.message.to_string());
            } else {
                corrections.push(outcome.message.to_string());
            }
        }

        AnalysisResult {
            score: total.min(MAX_SCORE) as u8,
            feedback,
            corrections,
        }
    }

    /// Result for an exercise that has no rubric
    pub fn no_rubric() -> AnalysisResult {
        AnalysisResult::rejected(NO_RUBRIC_CORRECTION)
    }

    /// Get a description of the rating
    pub fn rating_description(rating: Rating) -> &'static str {
        match rating {
            Rating::Excellent => "Excellent form - keep it up",
            Rating::Good => "Good form with a few points to tighten",
            Rating::NeedsWork => "Form needs work - focus on the corrections below",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(passed: bool, points: u8, message: &'static str) -> CheckOutcome {
        CheckOutcome {
            check: "test-check",
            name: "Test check",
            metric: "unmeasured".to_string(),
            value: None,
            unit: "",
            passed,
            points: if passed { points } else { 0 },
            max_points: points,
            message,
        }
    }

    #[test]
    fn test_aggregate_splits_messages_in_order() {
        let result = ResultAggregator::aggregate(&[
            outcome(true, 35, "first"),
            outcome(false, 30, "second"),
            outcome(true, 25, "third"),
            outcome(false, 10, "fourth"),
        ]);
        assert_eq!(result.score, 60);
        assert_eq!(result.feedback, vec!["first", "third"]);
        assert_eq!(result.corrections, vec!["second", "fourth"]);
    }

    #[test]
    fn test_aggregate_clamps_to_100() {
        let result = ResultAggregator::aggregate(&[
            outcome(true, 80, "a"),
            outcome(true, 80, "b"),
            outcome(true, 200, "c"),
        ]);
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback.len(), 3);
    }

    #[test]
    fn test_aggregate_empty() {
        let result = ResultAggregator::aggregate(&[]);
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_no_rubric_result() {
        let result = ResultAggregator::no_rubric();
        assert_eq!(result.score, 0);
        assert!(result.feedback.is_empty());
        assert_eq!(result.corrections, vec![NO_RUBRIC_CORRECTION]);
    }
}
