//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::catalog::ExerciseInfo;
use crate::{FileAnalysis, Rating};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single file analysis as JSON
    pub fn report(&self, result: &FileAnalysis) -> String {
        self.render(result, "{}")
    }

    /// Report multiple analyses with a summary block
    pub fn report_with_summary(&self, results: &[FileAnalysis], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score,
                average_rating: stats.average_rating,
                total_corrections: stats.total_corrections,
                unscored: stats.unscored,
            },
        };
        self.render(&output, "{}")
    }

    /// Report the exercise catalog
    pub fn report_catalog(&self, exercises: &[ExerciseInfo]) -> String {
        self.render(exercises, "[]")
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [FileAnalysis],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_analyzed: usize,
    average_score: u8,
    average_rating: Rating,
    total_corrections: usize,
    unscored: usize,
}
