//! Pose data sources.
//!
//! The engine never produces keypoints itself; an external detector does.
//! A [`PoseSource`] is the seam where detector output (or a recorded fixture)
//! is handed to the engine.

use crate::{Exercise, Keypoint, PoseError};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// One frame of detector output plus an optional exercise hint
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSample {
    /// Raw keypoints; the length is validated by the engine, not here
    pub keypoints: Vec<Keypoint>,
    /// Exercise named by the data itself, if any
    pub exercise: Option<Exercise>,
}

/// Supplier of pose samples
pub trait PoseSource {
    /// Label used in diagnostics (file path, "stdin", ...)
    fn origin(&self) -> String;

    /// Load the sample
    fn load(&self) -> Result<PoseSample, PoseError>;
}

/// On-disk layout of a pose file: a bare keypoint array or a tagged object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoseDocument {
    Bare(Vec<Keypoint>),
    Tagged {
        #[serde(default)]
        exercise: Option<Exercise>,
        keypoints: Vec<Keypoint>,
    },
}

impl From<PoseDocument> for PoseSample {
    fn from(doc: PoseDocument) -> Self {
        match doc {
            PoseDocument::Bare(keypoints) => PoseSample {
                keypoints,
                exercise: None,
            },
            PoseDocument::Tagged {
                exercise,
                keypoints,
            } => PoseSample {
                keypoints,
                exercise,
            },
        }
    }
}

/// Parse pose JSON text
pub fn parse_pose_json(content: &str, origin: &str) -> Result<PoseSample, PoseError> {
    let doc: PoseDocument = serde_json::from_str(content).map_err(|source| PoseError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Ok(doc.into())
}

/// Pose JSON stored in a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PoseSource for JsonFileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<PoseSample, PoseError> {
        let content = fs::read_to_string(&self.path).map_err(|source| PoseError::Read {
            origin: self.origin(),
            source,
        })?;
        parse_pose_json(&content, &self.origin())
    }
}

/// Pose JSON already held in memory (e.g. read from stdin)
#[derive(Debug, Clone)]
pub struct JsonTextSource {
    origin: String,
    content: String,
}

impl JsonTextSource {
    pub fn new(origin: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            content: content.into(),
        }
    }
}

impl PoseSource for JsonTextSource {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn load(&self) -> Result<PoseSample, PoseError> {
        parse_pose_json(&self.content, &self.origin)
    }
}

/// Fixed in-memory sample, for tests and embedding callers
#[derive(Debug, Clone)]
pub struct StaticSource {
    sample: PoseSample,
}

impl StaticSource {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            sample: PoseSample {
                keypoints,
                exercise: None,
            },
        }
    }

    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.sample.exercise = Some(exercise);
        self
    }
}

impl PoseSource for StaticSource {
    fn origin(&self) -> String {
        "in-memory".to_string()
    }

    fn load(&self) -> Result<PoseSample, PoseError> {
        Ok(self.sample.clone())
    }
}
