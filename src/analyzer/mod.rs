//! Analyzer module - pose rubric scoring engine

pub mod engine;
pub mod geometry;
pub mod rules;
pub mod scoring;

pub use engine::RubricEngine;
pub use scoring::ResultAggregator;
