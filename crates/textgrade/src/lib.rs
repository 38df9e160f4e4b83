//! Rubric-based text grading.
//!
//! The [`analysis`] module turns a block of text into a [`ScoreResult`]: pattern and structure
//! signals are extracted, thresholded into letter grades, and folded through a weighted rubric
//! into a 0-100 score. The remaining modules carry the configuration, error and logging plumbing
//! shared by the CLI and HTTP front ends.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;

pub use analysis::{analyze_text, Grade, MatchMode, ScoreResult, TextAnalyzer};
