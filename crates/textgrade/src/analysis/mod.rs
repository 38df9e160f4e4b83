pub mod aggregate;
pub mod features;
pub mod grade;
pub mod rubric;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, CategoryScore, CriterionScore, ScoreResult};
pub use features::{extract_features, DegenerateInput, FeatureMetrics, MatchMode};
pub use grade::{final_grade, map_to_grade, Grade, Thresholds};
pub use rubric::{Rubric, RubricDefinition, RubricError};

use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Stateless analyzer that applies a validated rubric to text. Cheap to clone and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    rubric: Arc<Rubric>,
    match_mode: MatchMode,
}

impl TextAnalyzer {
    pub fn new(rubric: Rubric, match_mode: MatchMode) -> Self {
        Self {
            rubric: Arc::new(rubric),
            match_mode,
        }
    }

    pub fn standard() -> Result<Self, RubricError> {
        Ok(Self::new(Rubric::standard()?, MatchMode::default()))
    }

    /// Same rubric, different counting mode.
    pub fn with_match_mode(&self, match_mode: MatchMode) -> Self {
        Self {
            rubric: Arc::clone(&self.rubric),
            match_mode,
        }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn extract(&self, text: &str) -> FeatureMetrics {
        extract_features(text, self.match_mode)
    }

    pub fn analyze(&self, text: &str) -> ScoreResult {
        let metrics = self.extract(text);
        if metrics.is_degenerate() {
            debug!(flags = ?metrics.degenerate, "degenerate input, using fallback metrics");
        }

        let result = aggregate(&self.rubric, metrics);
        debug!(
            words = result.metrics.word_stats.total,
            sentences = result.metrics.sentence_count(),
            final_score = result.final_score,
            final_grade = %result.final_grade,
            match_mode = %self.match_mode,
            "text analyzed"
        );
        result
    }
}

/// Grades `text` with the built-in rubric and default match mode.
pub fn analyze_text(text: &str) -> ScoreResult {
    static DEFAULT: OnceLock<TextAnalyzer> = OnceLock::new();
    DEFAULT
        .get_or_init(|| TextAnalyzer::standard().expect("built-in rubric is valid"))
        .analyze(text)
}
