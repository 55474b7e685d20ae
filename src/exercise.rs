//! Exercise selector

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Exercise a pose is scored against.
///
/// Only `Squat`, `Pushup` and `Plank` carry a rubric. Every other id,
/// including the selectable `deadlift` and `lunge`, is kept as `Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Exercise {
    Squat,
    Pushup,
    Plank,
    /// Exercise without a rubric
    Unsupported(UnsupportedId),
}

/// Normalized id of an exercise without a rubric. Only built by [`Exercise::parse`],
/// so it never holds a scored id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedId(String);

impl UnsupportedId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Exercise {
    /// Parse an exercise id (case-insensitive, plural aliases accepted)
    pub fn parse(id: &str) -> Self {
        let normalized = id.trim().to_lowercase();
        match normalized.as_str() {
            "squat" | "squats" => Exercise::Squat,
            "pushup" | "pushups" | "push-up" | "push-ups" => Exercise::Pushup,
            "plank" | "planks" => Exercise::Plank,
            "deadlifts" => Exercise::Unsupported(UnsupportedId("deadlift".to_string())),
            "lunges" => Exercise::Unsupported(UnsupportedId("lunge".to_string())),
            "bicep-curls" => Exercise::Unsupported(UnsupportedId("bicep-curl".to_string())),
            _ => Exercise::Unsupported(UnsupportedId(normalized)),
        }
    }

    /// Canonical id
    pub fn id(&self) -> &str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Pushup => "pushup",
            Exercise::Plank => "plank",
            Exercise::Unsupported(id) => id.as_str(),
        }
    }

    pub fn has_rubric(&self) -> bool {
        !matches!(self, Exercise::Unsupported(_))
    }
}

impl FromStr for Exercise {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Exercise::parse(s))
    }
}

impl From<String> for Exercise {
    fn from(id: String) -> Self {
        Exercise::parse(&id)
    }
}

impl From<Exercise> for String {
    fn from(exercise: Exercise) -> Self {
        exercise.id().to_string()
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_ids() {
        assert_eq!(Exercise::parse("squat"), Exercise::Squat);
        assert_eq!(Exercise::parse("pushup"), Exercise::Pushup);
        assert_eq!(Exercise::parse("plank"), Exercise::Plank);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_plurals() {
        assert_eq!(Exercise::parse(" Squats "), Exercise::Squat);
        assert_eq!(Exercise::parse("Push-Ups"), Exercise::Pushup);
        assert_eq!(Exercise::parse("PLANKS"), Exercise::Plank);
    }

    #[test]
    fn test_unscored_exercises_are_unsupported() {
        let deadlift = Exercise::parse("deadlift");
        assert!(matches!(&deadlift, Exercise::Unsupported(id) if id.as_str() == "deadlift"));
        assert!(!deadlift.has_rubric());
        assert_eq!(Exercise::parse("Deadlifts"), deadlift);
        assert_eq!(Exercise::parse("lunges").id(), "lunge");
        assert_eq!(Exercise::parse("Yoga").id(), "yoga");
    }

    #[test]
    fn test_scored_ids_never_unsupported() {
        for id in ["squat", "Pushups", "push-up", " plank "] {
            let exercise = Exercise::parse(id);
            assert!(exercise.has_rubric(), "{} should be scored", id);
            assert!(!matches!(exercise, Exercise::Unsupported(_)));
        }
    }

    #[test]
    fn test_serde_uses_id_string() {
        let json = serde_json::to_string(&Exercise::Pushup).unwrap();
        assert_eq!(json, "\"pushup\"");
        let parsed: Exercise = serde_json::from_str("\"Lunge\"").unwrap();
        assert_eq!(parsed, Exercise::parse("lunge"));
        assert_eq!(parsed.id(), "lunge");
        assert!(!parsed.has_rubric());
    }
}
