//! Coaching catalog: what each exercise is and what the analysis looks at

use crate::Exercise;
use serde::Serialize;

/// Difficulty level shown alongside an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Static description of an exercise
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    /// Canonical exercise id
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// Recommended clip length
    pub duration: &'static str,
    pub key_points: &'static [&'static str],
    pub common_mistakes: &'static [&'static str],
    pub analysis_points: &'static [&'static str],
    /// Whether a scoring rubric exists for this exercise
    pub scored: bool,
}

const CATALOG: &[ExerciseInfo] = &[
    ExerciseInfo {
        id: "squat",
        name: "Squats",
        description: "Lower body strength exercise focusing on quads, glutes, and hamstrings",
        difficulty: Difficulty::Beginner,
        duration: "5-10 seconds",
        key_points: &[
            "Feet shoulder-width apart",
            "Knees track over toes",
            "Hip hinge movement",
            "Chest up, core engaged",
        ],
        common_mistakes: &[
            "Knees caving inward",
            "Not going deep enough",
            "Forward lean",
            "Heel lifting",
        ],
        analysis_points: &[
            "Knee alignment and tracking",
            "Hip depth and angle",
            "Back posture and chest position",
        ],
        scored: true,
    },
    ExerciseInfo {
        id: "pushup",
        name: "Push-ups",
        description: "Upper body exercise targeting chest, shoulders, and triceps",
        difficulty: Difficulty::Beginner,
        duration: "8-12 seconds",
        key_points: &[
            "Hands slightly wider than shoulders",
            "Straight line from head to heels",
            "Elbows at 45-degree angle",
            "Full range of motion",
        ],
        common_mistakes: &[
            "Sagging hips",
            "Flaring elbows too wide",
            "Partial range of motion",
            "Head position too high/low",
        ],
        analysis_points: &[
            "Body alignment and plank position",
            "Elbow angle and path",
            "Range of motion",
        ],
        scored: true,
    },
    ExerciseInfo {
        id: "plank",
        name: "Planks",
        description: "Core stability exercise for building abdominal and back strength",
        difficulty: Difficulty::Beginner,
        duration: "10-30 seconds",
        key_points: &[
            "Forearms parallel to body",
            "Straight line from head to heels",
            "Engage core muscles",
            "Neutral neck position",
        ],
        common_mistakes: &[
            "Hips too high or low",
            "Holding breath",
            "Shoulders not over elbows",
            "Looking up or down",
        ],
        analysis_points: &[
            "Hip alignment and height",
            "Shoulder position over elbows",
            "Core engagement (fixed bonus, not measured)",
        ],
        scored: true,
    },
    ExerciseInfo {
        id: "deadlift",
        name: "Deadlifts",
        description: "Full-body exercise focusing on posterior chain strength",
        difficulty: Difficulty::Intermediate,
        duration: "6-10 seconds",
        key_points: &[
            "Hip hinge movement pattern",
            "Neutral spine throughout",
            "Bar close to body",
            "Drive through heels",
        ],
        common_mistakes: &[
            "Rounding the back",
            "Bar drifting away from body",
            "Hyperextending at top",
            "Knees caving inward",
        ],
        analysis_points: &[],
        scored: false,
    },
    ExerciseInfo {
        id: "lunge",
        name: "Lunges",
        description: "Unilateral leg exercise for strength and balance",
        difficulty: Difficulty::Beginner,
        duration: "8-15 seconds",
        key_points: &[
            "Step forward with control",
            "Both knees at 90 degrees",
            "Front knee over ankle",
            "Torso upright",
        ],
        common_mistakes: &[
            "Front knee over toes",
            "Leaning forward",
            "Step too short or long",
            "Pushing off back toe",
        ],
        analysis_points: &[],
        scored: false,
    },
    ExerciseInfo {
        id: "bicep-curl",
        name: "Bicep Curls",
        description: "Isolation exercise for bicep muscle development",
        difficulty: Difficulty::Beginner,
        duration: "6-10 seconds",
        key_points: &[
            "Elbows stable at sides",
            "Controlled movement tempo",
            "Full range of motion",
            "Avoid swinging",
        ],
        common_mistakes: &[
            "Using momentum/swinging",
            "Elbows moving forward",
            "Partial range of motion",
            "Too fast tempo",
        ],
        analysis_points: &[],
        scored: false,
    },
];

/// Every catalogued exercise, scored ones first
pub fn all() -> &'static [ExerciseInfo] {
    CATALOG
}

/// Catalog entry for an exercise, if it is catalogued
pub fn lookup(exercise: &Exercise) -> Option<&'static ExerciseInfo> {
    CATALOG.iter().find(|info| info.id == exercise.id())
}
