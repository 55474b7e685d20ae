//! Formscore: Exercise Form Scoring Engine
//!
//! This library scores a single frame of pose keypoints against a fixed
//! per-exercise rubric and explains the result as positive feedback and
//! corrections.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod exercise;
pub mod landmark;
pub mod reporter;
pub mod source;

pub use error::PoseError;
pub use exercise::Exercise;
pub use landmark::{Landmark, LANDMARK_COUNT};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single 2-D anatomical landmark produced by an external pose detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal position (pixels or normalized)
    pub x: f64,
    /// Vertical position (pixels or normalized)
    pub y: f64,
    /// Detector confidence that the landmark is present (0-1)
    #[serde(default = "full_visibility")]
    pub visibility: f64,
}

fn full_visibility() -> f64 {
    1.0
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visibility: 1.0,
        }
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// True when both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Full set of landmarks for one frame, always exactly [`LANDMARK_COUNT`] long
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    keypoints: [Keypoint; LANDMARK_COUNT],
}

impl Pose {
    pub fn new(keypoints: [Keypoint; LANDMARK_COUNT]) -> Self {
        Self { keypoints }
    }

    /// Build a pose from detector output, rejecting any other length
    pub fn from_keypoints(keypoints: &[Keypoint]) -> Result<Self, PoseError> {
        let keypoints: [Keypoint; LANDMARK_COUNT] =
            keypoints.try_into().map_err(|_| PoseError::WrongLength {
                expected: LANDMARK_COUNT,
                found: keypoints.len(),
            })?;
        Ok(Self { keypoints })
    }

    /// Keypoint for a named landmark
    pub fn get(&self, landmark: Landmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }

    /// Replace one landmark, returning the modified pose
    pub fn with(mut self, landmark: Landmark, keypoint: Keypoint) -> Self {
        self.keypoints[landmark.index()] = keypoint;
        self
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new([Keypoint::default(); LANDMARK_COUNT])
    }
}

/// Outcome of scoring one pose against one exercise rubric
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Form score (0-100)
    pub score: u8,
    /// One message per passed check, in evaluation order
    pub feedback: Vec<String>,
    /// One message per failed check, in evaluation order
    pub corrections: Vec<String>,
}

impl AnalysisResult {
    /// Zero-score result carrying a single correction
    pub fn rejected(correction: impl Into<String>) -> Self {
        Self {
            score: 0,
            feedback: Vec::new(),
            corrections: vec![correction.into()],
        }
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score)
    }
}

/// Banded reading of a form score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsWork,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Rating::Excellent,
            60..=79 => Rating::Good,
            _ => Rating::NeedsWork,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::NeedsWork => write!(f, "Needs work"),
        }
    }
}

/// Explanation of a single evaluated check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// Stable check id (e.g. "squat-depth")
    pub check: &'static str,
    /// Human-readable check name
    pub name: &'static str,
    /// What was measured (e.g. "angle at left knee")
    pub metric: String,
    /// Measured value; None when the check measures nothing
    pub value: Option<f64>,
    /// Unit of the measured value
    pub unit: &'static str,
    pub passed: bool,
    /// Points awarded (0 when failed)
    pub points: u8,
    /// Best attainable points for this check
    pub max_points: u8,
    /// Feedback when passed, correction when failed
    pub message: &'static str,
}

/// Analysis of one pose file, as produced by the CLI and library callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    /// Path to the analyzed pose file
    pub file_path: PathBuf,
    /// Exercise the pose was scored against
    pub exercise: Exercise,
    /// The scored result
    pub analysis: AnalysisResult,
    pub rating: Rating,
    /// Per-check explanation (empty when the exercise has no rubric)
    pub checks: Vec<CheckOutcome>,
}

/// Public API: score one pose against an exercise rubric.
pub fn evaluate(pose: &Pose, exercise: &Exercise) -> AnalysisResult {
    analyzer::RubricEngine::new().evaluate(pose, exercise)
}

/// Public API: analyze a single pose file.
///
/// * `path` - path to the pose JSON file
/// * `work_dir` - directory used for config lookup
/// * `exercise` - exercise to score against; falls back to the file and config when None
pub fn analyze_file(
    path: &std::path::Path,
    work_dir: &std::path::Path,
    exercise: Option<&Exercise>,
) -> anyhow::Result<FileAnalysis> {
    let config = crate::config::load_config(work_dir, None)?;
    let engine = analyzer::RubricEngine::new();
    engine.analyze(path, exercise, Some(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_from_keypoints_wrong_length() {
        let err = Pose::from_keypoints(&[Keypoint::default(); 12]).unwrap_err();
        assert!(matches!(
            err,
            PoseError::WrongLength {
                expected: 33,
                found: 12
            }
        ));
    }

    #[test]
    fn test_pose_get_by_landmark() {
        let mut keypoints = vec![Keypoint::default(); LANDMARK_COUNT];
        keypoints[25] = Keypoint::new(4.0, 5.0);
        let pose = Pose::from_keypoints(&keypoints).unwrap();
        assert_eq!(pose.get(Landmark::LeftKnee), &Keypoint::new(4.0, 5.0));
        assert_eq!(pose.keypoints().len(), LANDMARK_COUNT);
    }

    #[test]
    fn test_keypoint_visibility_defaults_to_one() {
        let kp: Keypoint = serde_json::from_str(r#"{"x": 1.5, "y": 2}"#).unwrap();
        assert_eq!(kp.visibility, 1.0);
        assert_eq!(kp.x, 1.5);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(60), Rating::Good);
        assert_eq!(Rating::from_score(59), Rating::NeedsWork);
        assert_eq!(Rating::from_score(0), Rating::NeedsWork);
    }

    #[test]
    fn test_analysis_result_serializes_flat() {
        let result = AnalysisResult {
            score: 65,
            feedback: vec!["Good squat depth".to_string()],
            corrections: vec!["Keep knees aligned with toes".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"score":65,"feedback":["Good squat depth"],"corrections":["Keep knees aligned with toes"]}"#
        );
    }
}
