//! Integration tests: full analysis pipeline against test-fixtures/

use formscore::analyzer::RubricEngine;
use formscore::config::Config;
use formscore::{Exercise, FileAnalysis, Rating};
use std::path::{Path, PathBuf};

const FIXTURES: &str = "test-fixtures";

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join(name)
}

fn analyze(name: &str) -> FileAnalysis {
    RubricEngine::new()
        .analyze(&fixture(name), None, None)
        .unwrap_or_else(|e| panic!("analyze({}) failed: {:#}", name, e))
}

// --- Per-exercise fixtures ---

#[test]
fn good_squat_scores_full_marks() {
    let r = analyze("squat-good.pose.json");
    assert_eq!(r.exercise, Exercise::Squat);
    assert_eq!(r.analysis.score, 100);
    assert_eq!(r.rating, Rating::Excellent);
    assert_eq!(
        r.analysis.feedback,
        vec![
            "Excellent squat depth achieved!",
            "Great back posture maintained!",
            "Good knee alignment!"
        ]
    );
    assert!(r.analysis.corrections.is_empty());
}

#[test]
fn poor_squat_collects_every_correction() {
    let r = analyze("squat-poor.pose.json");
    assert_eq!(r.analysis.score, 0);
    assert_eq!(r.rating, Rating::NeedsWork);
    assert!(r.analysis.feedback.is_empty());
    assert_eq!(
        r.analysis.corrections,
        vec![
            "Go deeper - aim for thighs parallel to ground",
            "Keep your chest up and back straight",
            "Keep knees aligned with toes"
        ]
    );
}

#[test]
fn pushup_fixture_passes_all_checks() {
    let r = analyze("pushup-good.pose.json");
    assert_eq!(r.exercise, Exercise::Pushup);
    assert_eq!(r.analysis.score, 100);
    assert_eq!(
        r.analysis.feedback,
        vec![
            "Perfect body alignment!",
            "Good elbow position!",
            "Good range of motion!"
        ]
    );
}

#[test]
fn plank_fixture_passes_all_checks() {
    let r = analyze("plank-good.pose.json");
    assert_eq!(r.exercise, Exercise::Plank);
    assert_eq!(r.analysis.score, 100);
    assert_eq!(r.analysis.feedback.len(), 3);
    assert_eq!(
        r.analysis.feedback.last().map(String::as_str),
        Some("Maintain this position with engaged core")
    );
}

#[test]
fn deadlift_has_no_rubric() {
    let r = analyze("deadlift.pose.json");
    assert_eq!(r.exercise.id(), "deadlift");
    assert_eq!(r.analysis.score, 0);
    assert!(r.analysis.feedback.is_empty());
    assert_eq!(
        r.analysis.corrections,
        vec!["No analysis rubric defined for this exercise"]
    );
    assert!(r.checks.is_empty());
}

#[test]
fn incomplete_pose_is_scored_zero_not_an_error() {
    let r = analyze("incomplete.pose.json");
    assert_eq!(r.analysis.score, 0);
    assert_eq!(
        r.analysis.corrections,
        vec!["Pose data incomplete: expected 33 landmarks, found 17"]
    );
}

// --- Check explanations ---

#[test]
fn checks_explain_the_score() {
    let r = analyze("squat-good.pose.json");
    let ids: Vec<&str> = r.checks.iter().map(|c| c.check).collect();
    assert_eq!(
        ids,
        vec!["squat-depth", "squat-back-posture", "squat-knee-alignment"]
    );
    let total: u32 = r.checks.iter().map(|c| c.points as u32).sum();
    assert_eq!(total, r.analysis.score as u32);

    let depth = &r.checks[0];
    assert_eq!(depth.unit, "°");
    let value = depth.value.expect("depth is measured");
    assert!(value > 80.0 && value < 90.0, "knee angle = {}", value);
}

#[test]
fn mid_tier_squat_depth() {
    let r = analyze("session/rep-2.pose.json");
    assert_eq!(r.analysis.score, 90);
    assert_eq!(r.checks[0].points, 25);
    assert_eq!(r.analysis.feedback[0], "Good squat depth");
}

// --- Exercise resolution ---

#[test]
fn bare_array_needs_an_exercise() {
    let engine = RubricEngine::new();
    let err = engine
        .analyze(&fixture("bare-squat.pose.json"), None, None)
        .unwrap_err();
    assert!(err.to_string().contains("No exercise specified"));

    let r = engine
        .analyze(&fixture("bare-squat.pose.json"), Some(&Exercise::Squat), None)
        .unwrap();
    assert_eq!(r.analysis.score, 100);
}

#[test]
fn config_override_selects_exercise() {
    let config: Config = serde_json::from_str(
        r#"{
            "exercise": "plank",
            "overrides": [{ "files": ["**/bare-*.pose.json"], "exercise": "squat" }]
        }"#,
    )
    .unwrap();
    let r = RubricEngine::new()
        .analyze(&fixture("bare-squat.pose.json"), None, Some(&config))
        .unwrap();
    assert_eq!(r.exercise, Exercise::Squat);
}

#[test]
fn scoring_same_pose_as_other_exercise() {
    let r = RubricEngine::new()
        .analyze(&fixture("squat-good.pose.json"), Some(&Exercise::Plank), None)
        .unwrap();
    assert_eq!(r.exercise, Exercise::Plank);
    assert_eq!(r.checks.len(), 3);
    assert!(r.analysis.score <= 100);
}

// --- Batch analysis ---

#[test]
fn session_directory_stats() {
    let paths: Vec<PathBuf> = ["rep-1", "rep-2", "rep-3"]
        .iter()
        .map(|name| fixture(&format!("session/{}.pose.json", name)))
        .collect();
    let results: Vec<FileAnalysis> = RubricEngine::new()
        .analyze_parallel(&paths, None, None)
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    let scores: Vec<u8> = results.iter().map(|r| r.analysis.score).collect();
    assert_eq!(scores, vec![100, 90, 0]);

    let stats = RubricEngine::aggregate_stats(&results);
    assert_eq!(stats.files_analyzed, 3);
    assert_eq!(stats.average_score, 63);
    assert_eq!(stats.average_rating, Rating::Good);
    assert_eq!(stats.total_corrections, 3);
    assert_eq!(stats.unscored, 0);
}

#[test]
fn public_analyze_file_api() {
    let r = formscore::analyze_file(
        &fixture("pushup-good.pose.json"),
        Path::new(FIXTURES),
        None,
    )
    .unwrap();
    assert_eq!(r.analysis.score, 100);
}
