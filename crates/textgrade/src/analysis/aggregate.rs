use super::features::FeatureMetrics;
use super::grade::{final_grade, Grade};
use super::rubric::Rubric;
use serde::{Deserialize, Serialize};

/// Grade and weighted contribution of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub key: String,
    pub grade: Grade,
    pub points: u8,
    pub weight: f64,
    pub weighted_score: f64,
}

/// Criterion scores of one category, in rubric order, and their weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub key: String,
    pub weight: f64,
    pub criteria: Vec<CriterionScore>,
    pub total: f64,
}

impl CategoryScore {
    /// Best grade among the category's criteria.
    pub fn headline_grade(&self) -> Grade {
        self.criteria
            .iter()
            .map(|criterion| criterion.grade)
            .max()
            .unwrap_or(Grade::E)
    }

    pub fn criterion(&self, key: &str) -> Option<&CriterionScore> {
        self.criteria.iter().find(|criterion| criterion.key == key)
    }
}

/// Outcome of grading one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub categories: Vec<CategoryScore>,
    pub final_score: u8,
    pub final_grade: Grade,
    pub metrics: FeatureMetrics,
}

impl ScoreResult {
    pub fn category(&self, key: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn criterion(&self, key: &str) -> Option<&CriterionScore> {
        self.categories
            .iter()
            .find_map(|category| category.criterion(key))
    }
}

pub fn aggregate(rubric: &Rubric, metrics: FeatureMetrics) -> ScoreResult {
    let mut categories = Vec::with_capacity(rubric.categories().len());
    let mut raw_score = 0.0;

    for category in rubric.categories() {
        let mut criteria = Vec::with_capacity(category.criteria.len());
        let mut total = 0.0;

        for criterion in &category.criteria {
            let grade = criterion.analysis.grade(&metrics);
            let points = grade.points();
            let weighted_score = f64::from(points) * criterion.weight;
            total += weighted_score;
            criteria.push(CriterionScore {
                key: criterion.key.clone(),
                grade,
                points,
                weight: criterion.weight,
                weighted_score,
            });
        }

        raw_score += total * category.weight;
        categories.push(CategoryScore {
            key: category.key.clone(),
            weight: category.weight,
            criteria,
            total,
        });
    }

    let final_score = scale_to_hundred(raw_score);

    ScoreResult {
        categories,
        final_score,
        final_grade: final_grade(final_score),
        metrics,
    }
}

/// Maps a raw score on the 0-5 point scale to 0-100.
fn scale_to_hundred(raw_score: f64) -> u8 {
    let scaled = (raw_score * 20.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u8
}
