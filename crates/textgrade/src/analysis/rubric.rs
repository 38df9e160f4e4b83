use super::features::FeatureMetrics;
use super::grade::{map_to_grade, Grade, Thresholds};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Allowed drift when checking that a set of weights sums to one.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Stateless grading function bound to a criterion by identifier.
#[derive(Clone, Copy)]
pub struct Analysis {
    pub id: &'static str,
    pub metric: fn(&FeatureMetrics) -> f64,
    pub thresholds: Thresholds,
}

impl fmt::Debug for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analysis")
            .field("id", &self.id)
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

impl Analysis {
    pub fn score(&self, metrics: &FeatureMetrics) -> f64 {
        (self.metric)(metrics)
    }

    pub fn grade(&self, metrics: &FeatureMetrics) -> Grade {
        map_to_grade(self.score(metrics), &self.thresholds)
    }
}

const ANALYSES: [Analysis; 10] = [
    Analysis {
        id: "social_significance",
        metric: |m| m.impact.score,
        thresholds: Thresholds::new(10.0, 7.0, 5.0, 3.0),
    },
    Analysis {
        id: "temporal_relevance",
        metric: |m| m.temporal.score,
        thresholds: Thresholds::new(8.0, 6.0, 4.0, 2.0),
    },
    Analysis {
        id: "question_quality",
        metric: |m| m.dialectical.question_score,
        thresholds: Thresholds::new(12.0, 8.0, 5.0, 3.0),
    },
    Analysis {
        id: "argument_structure",
        metric: |m| m.dialectical.argument_score as f64,
        thresholds: Thresholds::new(5.0, 3.0, 2.0, 1.0),
    },
    Analysis {
        id: "network_analysis",
        metric: |m| m.social.network_score,
        thresholds: Thresholds::new(15.0, 10.0, 7.0, 4.0),
    },
    Analysis {
        id: "dialogue_quality",
        metric: |m| m.social.dialogue_score as f64,
        thresholds: Thresholds::new(8.0, 6.0, 4.0, 2.0),
    },
    Analysis {
        id: "resource_recognition",
        metric: |m| m.material.resource_score,
        thresholds: Thresholds::new(10.0, 7.0, 5.0, 3.0),
    },
    Analysis {
        id: "practical_implications",
        metric: |m| m.material.practical_score,
        thresholds: Thresholds::new(12.0, 8.0, 5.0, 3.0),
    },
    Analysis {
        id: "authority_handling",
        metric: |m| m.symbolic.authority_score,
        thresholds: Thresholds::new(15.0, 10.0, 7.0, 4.0),
    },
    Analysis {
        id: "conclusion_legitimacy",
        metric: |m| m.symbolic.legitimacy_score as f64,
        thresholds: Thresholds::new(5.0, 3.0, 2.0, 1.0),
    },
];

/// Registry of analysis functions keyed by identifier. Built once, never mutated.
pub fn analysis_table() -> &'static BTreeMap<&'static str, Analysis> {
    static TABLE: OnceLock<BTreeMap<&'static str, Analysis>> = OnceLock::new();
    TABLE.get_or_init(|| ANALYSES.iter().map(|analysis| (analysis.id, *analysis)).collect())
}

/// Rubric as written in configuration. Must pass [`RubricDefinition::validate`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricDefinition {
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub key: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub criteria: Vec<CriterionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDefinition {
    pub key: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub analysis: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    #[error("failed to read rubric file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rubric definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rubric defines no categories")]
    Empty,
    #[error("category '{0}' defines no criteria")]
    EmptyCategory(String),
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),
    #[error("'{0}' is missing a weight")]
    MissingWeight(String),
    #[error("'{key}' has weight {weight} outside [0, 1]")]
    InvalidWeight { key: String, weight: f64 },
    #[error("weights of {scope} sum to {sum:.6}, expected 1")]
    UnnormalizedWeights { scope: String, sum: f64 },
    #[error("criterion '{0}' is missing an analysis binding")]
    MissingAnalysis(String),
    #[error("criterion '{criterion}' references unknown analysis '{analysis}'")]
    UnknownAnalysis { criterion: String, analysis: String },
}

/// Validated rubric with every criterion bound to its analysis function.
#[derive(Debug, Clone)]
pub struct Rubric {
    categories: Vec<Category>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub key: String,
    pub weight: f64,
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone)]
pub struct Criterion {
    pub key: String,
    pub weight: f64,
    pub analysis: Analysis,
}

impl Rubric {
    /// Built-in rubric. Category weights sum to one, and each category's criterion weights are
    /// shares of that category.
    pub fn standard() -> Result<Self, RubricError> {
        RubricDefinition::standard().validate()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        RubricDefinition::from_path(path)?.validate()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn criterion_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.criteria.len())
            .sum()
    }
}

impl RubricDefinition {
    pub fn standard() -> Self {
        fn category(key: &str, weight: f64, criteria: &[(&str, f64)]) -> CategoryDefinition {
            CategoryDefinition {
                key: key.to_string(),
                weight: Some(weight),
                criteria: criteria
                    .iter()
                    .map(|&(key, weight)| CriterionDefinition {
                        key: key.to_string(),
                        weight: Some(weight),
                        analysis: Some(key.to_string()),
                    })
                    .collect(),
            }
        }

        Self {
            categories: vec![
                category(
                    "information_impact",
                    0.30,
                    &[
                        ("social_significance", 2.0 / 3.0),
                        ("temporal_relevance", 1.0 / 3.0),
                    ],
                ),
                category(
                    "dialectical_capital",
                    0.10,
                    &[("question_quality", 0.5), ("argument_structure", 0.5)],
                ),
                category(
                    "social_reasoning",
                    0.20,
                    &[("network_analysis", 0.6), ("dialogue_quality", 0.4)],
                ),
                category(
                    "material_analysis",
                    0.15,
                    &[
                        ("resource_recognition", 8.0 / 15.0),
                        ("practical_implications", 7.0 / 15.0),
                    ],
                ),
                category(
                    "symbolic_synthesis",
                    0.25,
                    &[("authority_handling", 0.6), ("conclusion_legitimacy", 0.4)],
                ),
            ],
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, RubricError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<Rubric, RubricError> {
        if self.categories.is_empty() {
            return Err(RubricError::Empty);
        }

        let table = analysis_table();
        let mut category_keys = HashSet::new();
        let mut criterion_keys = HashSet::new();
        let mut categories = Vec::with_capacity(self.categories.len());

        for definition in &self.categories {
            if !category_keys.insert(definition.key.as_str()) {
                return Err(RubricError::DuplicateKey(definition.key.clone()));
            }
            let weight = checked_weight(&definition.key, definition.weight)?;

            if definition.criteria.is_empty() {
                return Err(RubricError::EmptyCategory(definition.key.clone()));
            }

            let mut criteria = Vec::with_capacity(definition.criteria.len());
            for criterion in &definition.criteria {
                if !criterion_keys.insert(criterion.key.as_str()) {
                    return Err(RubricError::DuplicateKey(criterion.key.clone()));
                }
                let criterion_weight = checked_weight(&criterion.key, criterion.weight)?;
                let analysis_id = criterion
                    .analysis
                    .as_deref()
                    .ok_or_else(|| RubricError::MissingAnalysis(criterion.key.clone()))?;
                let analysis =
                    table
                        .get(analysis_id)
                        .copied()
                        .ok_or_else(|| RubricError::UnknownAnalysis {
                            criterion: criterion.key.clone(),
                            analysis: analysis_id.to_string(),
                        })?;

                criteria.push(Criterion {
                    key: criterion.key.clone(),
                    weight: criterion_weight,
                    analysis,
                });
            }

            ensure_normalized(
                &format!("category '{}'", definition.key),
                criteria.iter().map(|criterion| criterion.weight),
            )?;

            categories.push(Category {
                key: definition.key.clone(),
                weight,
                criteria,
            });
        }

        ensure_normalized(
            "rubric categories",
            categories.iter().map(|category| category.weight),
        )?;

        Ok(Rubric { categories })
    }
}

fn checked_weight(key: &str, weight: Option<f64>) -> Result<f64, RubricError> {
    let weight = weight.ok_or_else(|| RubricError::MissingWeight(key.to_string()))?;
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(RubricError::InvalidWeight {
            key: key.to_string(),
            weight,
        });
    }
    Ok(weight)
}

fn ensure_normalized(scope: &str, weights: impl Iterator<Item = f64>) -> Result<(), RubricError> {
    let sum: f64 = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(RubricError::UnnormalizedWeights {
            scope: scope.to_string(),
            sum,
        });
    }
    Ok(())
}
