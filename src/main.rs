//! Formscore: Exercise Form Scoring CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use formscore::analyzer::RubricEngine;
use formscore::catalog;
use formscore::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use formscore::reporter::{ConsoleReporter, JsonReporter};
use formscore::source::JsonTextSource;
use formscore::{Exercise, FileAnalysis};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Formscore: score exercise form from pose keypoints
#[derive(Parser, Debug)]
#[command(name = "formscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pose file or directory to analyze, or - for stdin (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Exercise to score against (squat, pushup, plank, ...)
    #[arg(long, short)]
    exercise: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if any file scores below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (per-check measurements)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .formscorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run analysis in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .formscorerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Default exercise for pose files that don't name one
        #[arg(long)]
        exercise: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List known exercises and whether they can be scored
    Exercises {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Show what the analysis looks at for each exercise
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Init {
                threshold,
                exercise,
                dir,
            } => run_init(threshold, exercise, dir.as_deref()),
            Commands::Exercises { json, verbose } => run_exercises(json, verbose),
        };
    }

    let path = args
        .path
        .clone()
        .context("a pose file or directory PATH is required")?;
    let exercise = args.exercise.as_deref().map(Exercise::parse);
    if let Some(ref ex) = exercise {
        if !ex.has_rubric() && !args.quiet {
            eprintln!(
                "{}: No rubric for exercise '{}'; files will score 0",
                "Warning".yellow(),
                ex
            );
        }
    }

    let is_stdin = path.as_os_str() == "-";

    // Resolve work directory for config search
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = if is_stdin {
        cwd.as_path()
    } else if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let engine = RubricEngine::new();

    let (results, had_errors) = if is_stdin {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read pose data from stdin")?;
        let source = JsonTextSource::new("stdin", content);
        let result =
            engine.analyze_source(&source, Path::new("stdin"), exercise.as_ref(), Some(&config))?;
        (vec![result], false)
    } else {
        // Build ignore set from config
        let ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };

        let patterns = config.get_file_patterns();
        let pose_files = collect_pose_files(&path, ignore_set.as_ref(), &patterns)?;

        if pose_files.is_empty() {
            eprintln!("{}: No pose files found", "Warning".yellow());
            return Ok(ExitCode::from(2));
        }

        if args.verbose && !args.quiet {
            eprintln!(
                "{}: Analyzing {} pose file(s)",
                "Info".blue(),
                pose_files.len()
            );
        }

        // Set up parallel processing
        if let Some(jobs) = args.jobs {
            rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
                .ok();
        }

        let use_parallel = args.parallel || pose_files.len() > 10;
        let outcomes = if use_parallel {
            engine.analyze_parallel(&pose_files, exercise.as_ref(), Some(&config))
        } else {
            let paths: Vec<&Path> = pose_files.iter().map(PathBuf::as_path).collect();
            engine.analyze_many(&paths, exercise.as_ref(), Some(&config))
        };
        split_outcomes(&pose_files, outcomes, args.quiet)
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = RubricEngine::aggregate_stats(&results);

    // Output results
    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }

        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check threshold per file (CLI, then matching override, then config default)
    let below = below_threshold(&results, &config, args.threshold);
    if !below.is_empty() {
        if !args.quiet && !args.json {
            for (result, threshold) in &below {
                eprintln!(
                    "{}: {} scored {}, below threshold {}",
                    "Failed".red().bold(),
                    result.file_path.display(),
                    result.analysis.score,
                    threshold
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(threshold: Option<u8>, exercise: Option<String>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(70);
    let exercise = exercise.as_deref().map(Exercise::parse);
    if let Some(ref ex) = exercise {
        if !ex.has_rubric() {
            eprintln!(
                "{}: No rubric for exercise '{}'; files using it will score 0",
                "Warning".yellow(),
                ex
            );
        }
    }

    let mut json = serde_json::json!({
        "threshold": threshold_value,
        "ignore": ["**/drafts/**"],
        "filePatterns": [".pose.json"],
        "overrides": [
            {
                "files": ["**/warmup/**"],
                "threshold": 0
            }
        ]
    });
    if let Some(ref ex) = exercise {
        json["exercise"] = serde_json::Value::String(ex.id().to_string());
    }

    let content = serde_json::to_string_pretty(&json).context("Failed to render config")?;
    std::fs::write(&config_path, content + "\n")
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}, exercise={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value,
        exercise.as_ref().map(|e| e.id()).unwrap_or("none")
    );
    Ok(ExitCode::SUCCESS)
}

fn run_exercises(json: bool, verbose: bool) -> Result<ExitCode> {
    if json {
        println!("{}", JsonReporter::new().pretty().report_catalog(catalog::all()));
    } else {
        let mut reporter = ConsoleReporter::new();
        if verbose {
            reporter = reporter.verbose();
        }
        reporter.report_catalog(catalog::all());
    }
    Ok(ExitCode::SUCCESS)
}

fn collect_pose_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    // Skip hidden directories such as .git below the search root
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_pose_file(file_path, patterns) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_pose_file(path: &Path, patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    patterns.iter().any(|p| name.ends_with(p))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Separate successful analyses from failures, logging each failure
fn split_outcomes(
    files: &[PathBuf],
    outcomes: Vec<Result<FileAnalysis>>,
    quiet: bool,
) -> (Vec<FileAnalysis>, bool) {
    let mut results = Vec::new();
    let mut had_errors = false;

    for (file, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
            }
        }
    }

    (results, had_errors)
}

/// Files whose score falls below their effective threshold
fn below_threshold<'a>(
    results: &'a [FileAnalysis],
    config: &Config,
    cli_threshold: Option<u8>,
) -> Vec<(&'a FileAnalysis, u8)> {
    results
        .iter()
        .filter_map(|result| {
            let threshold =
                cli_threshold.or(config.effective_for_file(&result.file_path).threshold)?;
            (result.analysis.score < threshold).then_some((result, threshold))
        })
        .collect()
}
