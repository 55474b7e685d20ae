//! Config schema and deserialization

use crate::Exercise;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Default file-name suffixes treated as pose files
pub const DEFAULT_FILE_PATTERNS: &[&str] = &[".pose.json"];

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Exercise to score matched files against
    #[serde(default)]
    pub exercise: Option<String>,

    /// Optional threshold override for matched files
    #[serde(default)]
    pub threshold: Option<u8>,

    /// `files` compiled on first use; invalid patterns are skipped
    #[serde(skip)]
    matcher: OnceLock<Option<GlobSet>>,
}

impl ConfigOverride {
    /// Whether this override applies to `file_path`. Invalid patterns never match.
    pub fn matches(&self, file_path: &Path) -> bool {
        self.matcher
            .get_or_init(|| compile_patterns(&self.files))
            .as_ref()
            .is_some_and(|set| set.is_match(file_path))
    }
}

fn compile_patterns(patterns: &[String]) -> Option<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for glob in patterns.iter().filter_map(|p| Glob::new(p).ok()) {
        builder.add(glob);
    }
    builder.build().ok()
}

/// Root config structure for .formscorerc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum form score (exit 1 if below). Default: none
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Default exercise id for pose files that don't name one
    #[serde(default)]
    pub exercise: Option<String>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Custom pose file suffixes (default: .pose.json)
    #[serde(default)]
    pub file_patterns: Vec<String>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Get effective config for a specific file path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut threshold = self.threshold;
        let mut exercise = self.exercise.clone();

        // Apply matching overrides in order
        for override_cfg in &self.overrides {
            if override_cfg.matches(file_path) {
                if let Some(t) = override_cfg.threshold {
                    threshold = Some(t);
                }
                if let Some(ref ex) = override_cfg.exercise {
                    exercise = Some(ex.clone());
                }
            }
        }

        EffectiveConfig {
            threshold,
            exercise: exercise.map(|id| Exercise::parse(&id)),
        }
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.exercise.is_none() {
            self.exercise = base.exercise;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.file_patterns.is_empty() {
            self.file_patterns = base.file_patterns;
        }

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Get pose file patterns
    pub fn get_file_patterns(&self) -> Vec<&str> {
        if self.file_patterns.is_empty() {
            DEFAULT_FILE_PATTERNS.to_vec()
        } else {
            self.file_patterns.iter().map(|s| s.as_str()).collect()
        }
    }
}

/// Effective configuration for a specific file (after applying overrides)
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub threshold: Option<u8>,
    pub exercise: Option<Exercise>,
}
