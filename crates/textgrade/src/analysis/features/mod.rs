pub mod citations;
pub mod patterns;
pub mod tokens;

pub use citations::{CitationCounts, NumericContent};
pub use patterns::{MatchMode, PatternCounts, PatternSet};
pub use tokens::{SentenceComplexity, WordStats};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentences above this complexity count toward argument structure.
pub const ARGUMENT_COMPLEXITY: f64 = 15.0;
/// Sentences above this complexity count toward conclusion legitimacy.
pub const LEGITIMACY_COMPLEXITY: f64 = 20.0;

/// Input shapes that have no meaningful ratio or average and were given fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    NoWords,
    NoSentences,
}

impl DegenerateInput {
    /// Same name the flag carries in JSON output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoWords => "no_words",
            Self::NoSentences => "no_sentences",
        }
    }
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialecticalSignals {
    pub questions: PatternCounts,
    pub question_score: f64,
    pub argument_score: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialSignals {
    pub perspectives: PatternCounts,
    pub network_score: f64,
    pub dialogue_score: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSignals {
    pub resources: PatternCounts,
    pub practice: PatternCounts,
    pub resource_score: f64,
    pub practical_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolicSignals {
    pub authority_score: f64,
    pub legitimacy_score: usize,
}

/// Every raw signal derived from one text. Built once per analysis and read by the rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMetrics {
    pub word_stats: WordStats,
    pub sentences: Vec<SentenceComplexity>,
    pub average_complexity: f64,
    pub citations: CitationCounts,
    pub numeric: NumericContent,
    pub impact: PatternCounts,
    pub temporal: PatternCounts,
    pub dialectical: DialecticalSignals,
    pub social: SocialSignals,
    pub material: MaterialSignals,
    pub symbolic: SymbolicSignals,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degenerate: Vec<DegenerateInput>,
}

impl FeatureMetrics {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }

    fn sentences_above(&self, complexity: f64) -> usize {
        self.sentences
            .iter()
            .filter(|sentence| sentence.complexity > complexity)
            .count()
    }
}

pub fn extract_features(text: &str, mode: MatchMode) -> FeatureMetrics {
    let word_stats = tokens::word_stats(text);
    let sentences = tokens::sentence_complexity(text);
    let average_complexity = tokens::average_complexity(&sentences);
    let numeric = citations::numeric_content(text);
    let citations = citations::citation_counts(text);

    let mut degenerate = Vec::new();
    if word_stats.total == 0 {
        degenerate.push(DegenerateInput::NoWords);
    }
    if sentences.is_empty() {
        degenerate.push(DegenerateInput::NoSentences);
    }

    let impact = patterns::impact().count(text, mode);
    let temporal = patterns::temporal().count(text, mode);

    let questions = patterns::questions().count(text, mode);
    let question_score = questions.score + average_complexity;

    let perspectives = patterns::perspectives().count(text, mode);
    let network_score = perspectives.score;
    let dialogue_score = sentences
        .iter()
        .filter(|sentence| sentence.parenthetical_count > 0)
        .count();

    let resources = patterns::resources().count(text, mode);
    let practice = patterns::practice().count(text, mode);
    let resource_score = resources.score;
    let practical_score = practice.score + numeric.numbers as f64;

    let authority_score =
        citations.academic as f64 * 3.0 + citations.references as f64 * 2.0 + citations.quotes;

    let mut metrics = FeatureMetrics {
        word_stats,
        sentences,
        average_complexity,
        citations,
        numeric,
        impact,
        temporal,
        dialectical: DialecticalSignals {
            questions,
            question_score,
            argument_score: 0,
        },
        social: SocialSignals {
            perspectives,
            network_score,
            dialogue_score,
        },
        material: MaterialSignals {
            resources,
            practice,
            resource_score,
            practical_score,
        },
        symbolic: SymbolicSignals {
            authority_score,
            legitimacy_score: 0,
        },
        degenerate,
    };

    metrics.dialectical.argument_score = metrics.sentences_above(ARGUMENT_COMPLEXITY);
    metrics.symbolic.legitimacy_score = metrics.sentences_above(LEGITIMACY_COMPLEXITY);
    metrics
}
