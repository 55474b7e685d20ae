//! Rubric engine - dispatches a pose to its exercise rubric

use crate::config::Config;
use crate::source::{JsonFileSource, PoseSource};
use crate::{AnalysisResult, CheckOutcome, Exercise, FileAnalysis, Keypoint, Pose, Rating};
use crate::LANDMARK_COUNT;
use anyhow::Result;
use std::path::{Path, PathBuf};

use super::rules::rubric_for;
use super::ResultAggregator;

/// Main engine that scores poses against exercise rubrics.
///
/// Scoring is a pure function of (pose, exercise): the engine holds no state,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubricEngine;

impl RubricEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Evaluate each rubric check in order. Empty when the exercise has no rubric.
    pub fn explain(&self, pose: &Pose, exercise: &Exercise) -> Vec<CheckOutcome> {
        match rubric_for(exercise) {
            Some(rubric) => rubric.evaluate(pose),
            None => Vec::new(),
        }
    }

    /// Score a pose against an exercise rubric
    pub fn evaluate(&self, pose: &Pose, exercise: &Exercise) -> AnalysisResult {
        match rubric_for(exercise) {
            Some(rubric) => ResultAggregator::aggregate(&rubric.evaluate(pose)),
            None => ResultAggregator::no_rubric(),
        }
    }

    /// Score raw detector output. A keypoint list of the wrong length yields a
    /// zero score with a single correction instead of an error.
    pub fn evaluate_keypoints(&self, keypoints: &[Keypoint], exercise: &Exercise) -> AnalysisResult {
        self.score_keypoints(keypoints, exercise).0
    }

    fn score_keypoints(
        &self,
        keypoints: &[Keypoint],
        exercise: &Exercise,
    ) -> (AnalysisResult, Vec<CheckOutcome>) {
        let Some(rubric) = rubric_for(exercise) else {
            return (ResultAggregator::no_rubric(), Vec::new());
        };
        match Pose::from_keypoints(keypoints) {
            Ok(pose) => {
                let outcomes = rubric.evaluate(&pose);
                (ResultAggregator::aggregate(&outcomes), outcomes)
            }
            Err(_) => (malformed(keypoints.len()), Vec::new()),
        }
    }

    /// Analyze a pose file and return the result
    pub fn analyze(
        &self,
        path: &Path,
        exercise: Option<&Exercise>,
        config: Option<&Config>,
    ) -> Result<FileAnalysis> {
        self.analyze_source(&JsonFileSource::new(path), path, exercise, config)
    }

    /// Analyze a sample from any source. `path` is used for config overrides and
    /// reporting; it need not exist (e.g. "stdin").
    ///
    /// The exercise is resolved from, in order: `exercise`, the sample itself,
    /// config overrides matching `path`, the config default.
    pub fn analyze_source(
        &self,
        source: &dyn PoseSource,
        path: &Path,
        exercise: Option<&Exercise>,
        config: Option<&Config>,
    ) -> Result<FileAnalysis> {
        let sample = source.load()?;

        let exercise = exercise
            .cloned()
            .or(sample.exercise)
            .or_else(|| config.and_then(|c| c.effective_for_file(path).exercise));
        let Some(exercise) = exercise else {
            anyhow::bail!(
                "No exercise specified for {}: pass --exercise, add an \"exercise\" field, or set one in the config",
                source.origin()
            );
        };

        let (analysis, checks) = self.score_keypoints(&sample.keypoints, &exercise);
        let rating = analysis.rating();

        Ok(FileAnalysis {
            file_path: path.to_path_buf(),
            exercise,
            analysis,
            rating,
            checks,
        })
    }

    /// Analyze multiple pose files sequentially
    pub fn analyze_many(
        &self,
        paths: &[&Path],
        exercise: Option<&Exercise>,
        config: Option<&Config>,
    ) -> Vec<Result<FileAnalysis>> {
        paths
            .iter()
            .map(|p| self.analyze(p, exercise, config))
            .collect()
    }

    /// Analyze multiple pose files in parallel using rayon. Results keep input order.
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
        exercise: Option<&Exercise>,
        config: Option<&Config>,
    ) -> Vec<Result<FileAnalysis>> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| self.analyze(p, exercise, config))
            .collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[FileAnalysis]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.analysis.score as u32).sum();
        let average_score = (total_score / results.len() as u32) as u8;

        let total_corrections: usize = results.iter().map(|r| r.analysis.corrections.len()).sum();
        let unscored = results.iter().filter(|r| !r.exercise.has_rubric()).count();

        AggregateStats {
            files_analyzed: results.len(),
            average_score,
            average_rating: Rating::from_score(average_score),
            total_corrections,
            unscored,
        }
    }
}

fn malformed(found: usize) -> AnalysisResult {
    AnalysisResult::rejected(format!(
        "Pose data incomplete: expected {} landmarks, found {}",
        LANDMARK_COUNT, found
    ))
}

/// Aggregate statistics from multiple pose analyses
#[derive(Debug)]
pub struct AggregateStats {
    /// Number of files analyzed
    pub files_analyzed: usize,
    /// Average score across all files
    pub average_score: u8,
    pub average_rating: Rating,
    /// Total number of corrections across all files
    pub total_corrections: usize,
    /// Files whose exercise has no rubric
    pub unscored: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_analyzed: 0,
            average_score: 0,
            average_rating: Rating::NeedsWork,
            total_corrections: 0,
            unscored: 0,
        }
    }
}
