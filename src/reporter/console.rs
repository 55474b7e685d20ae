//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::ResultAggregator;
use crate::catalog::ExerciseInfo;
use crate::{catalog, CheckOutcome, FileAnalysis, Rating};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the per-check table
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single file analysis
    pub fn report(&self, result: &FileAnalysis) {
        self.print_header(result);
        self.print_score(result);

        if self.verbose && !result.checks.is_empty() {
            self.print_checks(&result.checks);
        }

        self.print_messages(result);
        println!();
    }

    /// Report multiple analyses with summary
    pub fn report_many(&self, results: &[FileAnalysis], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &FileAnalysis) {
        println!(
            "{}: {} {} ({})",
            result.file_path.display(),
            result.exercise,
            result.analysis.score,
            self.colorize_rating(result.rating)
        );
    }

    /// List the exercise catalog
    pub fn report_catalog(&self, exercises: &[ExerciseInfo]) {
        println!();
        println!("{}", "Exercises".bold());
        println!();
        for info in exercises {
            let marker = if info.scored {
                "scored".green()
            } else {
                "no rubric".dimmed()
            };
            println!(
                "   {} {} [{}]",
                format!("{:<12}", info.id).bold(),
                info.name,
                marker
            );
            println!(
                "   {:<12} {} | {} | {}",
                "",
                info.difficulty,
                info.duration,
                info.description.dimmed()
            );
            if self.verbose {
                for point in info.analysis_points {
                    println!("   {:<12} {} {}", "", "→".cyan(), point);
                }
            }
        }
        println!();
    }

    fn print_header(&self, result: &FileAnalysis) {
        println!();
        println!(
            "{}",
            format!("🏋 Form Analysis: {}", result.file_path.display()).bold()
        );
        let name = catalog::lookup(&result.exercise)
            .map(|info| info.name.to_string())
            .unwrap_or_else(|| result.exercise.to_string());
        println!("   Exercise: {}", name);
        println!();
    }

    fn print_score(&self, result: &FileAnalysis) {
        let score_bar = self.create_score_bar(result.analysis.score);
        let rating = self.colorize_rating(result.rating);

        println!("   Score: {} {}", score_bar, rating.bold());
        println!(
            "   {}",
            ResultAggregator::rating_description(result.rating).dimmed()
        );
        println!();
    }

    fn print_checks(&self, checks: &[CheckOutcome]) {
        println!("   {}", "Checks:".bold());
        for check in checks {
            let icon = if check.passed {
                "✓".green()
            } else {
                "✗".red()
            };
            let points = format!("{:>2}/{}", check.points, check.max_points);
            println!(
                "   {} {} {} {}",
                icon,
                points,
                check.name,
                format!("({}: {})", check.metric, format_value(check)).dimmed()
            );
        }
        println!();
    }

    fn print_messages(&self, result: &FileAnalysis) {
        if !result.analysis.feedback.is_empty() {
            println!("   {}", "Feedback:".bold());
            for message in &result.analysis.feedback {
                println!("   {} {}", "✓".green(), message);
            }
        }

        if !result.analysis.corrections.is_empty() {
            println!("   {}", "Corrections:".bold());
            for message in &result.analysis.corrections {
                println!("   {} {}", "→".red(), message);
            }
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files analyzed:    {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:     {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_rating(stats.average_rating)
        );
        println!("   Total corrections: {}", stats.total_corrections);
        if stats.unscored > 0 {
            println!(
                "   {} {} file(s) had no rubric for their exercise",
                "ℹ".blue(),
                stats.unscored
            );
        }
        println!();
    }

    fn colorize_rating(&self, rating: Rating) -> colored::ColoredString {
        let s = rating.to_string();
        match rating {
            Rating::Excellent => s.green().bold(),
            Rating::Good => s.yellow(),
            Rating::NeedsWork => s.red(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score.min(100) as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {:>3}%",
            "█".repeat(filled),
            "░".repeat(empty),
            score
        );

        if self.use_colors {
            match Rating::from_score(score) {
                Rating::Excellent => bar.green().to_string(),
                Rating::Good => bar.yellow().to_string(),
                Rating::NeedsWork => bar.red().to_string(),
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_value(check: &CheckOutcome) -> String {
    match check.value {
        Some(v) if v.is_finite() => format!("{:.1}{}", v, check.unit),
        Some(_) => "undefined".to_string(),
        None => "n/a".to_string(),
    }
}
