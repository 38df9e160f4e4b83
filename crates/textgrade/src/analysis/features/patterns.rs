use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// How keyword patterns are counted.
/// Deserialization goes through `FromStr`, so JSON accepts the same names as config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchMode {
    /// Every non-overlapping occurrence counts.
    #[default]
    #[serde(rename = "every")]
    EveryMatch,
    /// A pattern contributes at most one match per text.
    #[serde(rename = "first")]
    FirstMatch,
}

impl MatchMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EveryMatch => "every",
            Self::FirstMatch => "first",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match mode '{0}' (expected 'every' or 'first')")]
pub struct UnknownMatchMode(pub String);

impl FromStr for MatchMode {
    type Err = UnknownMatchMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "every" | "all" | "every_match" => Ok(Self::EveryMatch),
            "first" | "single" | "first_match" => Ok(Self::FirstMatch),
            other => Err(UnknownMatchMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for MatchMode {
    type Error = UnknownMatchMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Named keyword pattern and its contribution to the composite score.
struct WeightedPattern {
    key: &'static str,
    regex: Regex,
    weight: f64,
}

/// Group of keyword patterns combined linearly into one composite score.
pub struct PatternSet {
    patterns: Vec<WeightedPattern>,
}

/// Per-pattern match counts and their weighted sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternCounts {
    pub counts: BTreeMap<String, usize>,
    pub score: f64,
}

impl PatternCounts {
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

impl PatternSet {
    fn new(specs: &[(&'static str, &'static str, f64)]) -> Self {
        let patterns = specs
            .iter()
            .map(|&(key, alternatives, weight)| WeightedPattern {
                key,
                regex: keyword_regex(alternatives),
                weight,
            })
            .collect();
        Self { patterns }
    }

    pub fn count(&self, text: &str, mode: MatchMode) -> PatternCounts {
        let mut counts = BTreeMap::new();
        let mut score = 0.0;

        for pattern in &self.patterns {
            let hits = match mode {
                MatchMode::EveryMatch => pattern.regex.find_iter(text).count(),
                MatchMode::FirstMatch => usize::from(pattern.regex.is_match(text)),
            };
            score += hits as f64 * pattern.weight;
            counts.insert(pattern.key.to_string(), hits);
        }

        PatternCounts { counts, score }
    }
}

/// Whole-word, case-insensitive alternation. `\b` is Unicode-aware in `regex`.
fn keyword_regex(alternatives: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).expect("keyword pattern compiles")
}

pub fn impact() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| {
        PatternSet::new(&[
            (
                "direct_life",
                "health|safety|rights|education|life|death|emergency|crisis",
                3.0,
            ),
            (
                "systemic",
                "system|policy|law|regulation|government|reform|change",
                2.0,
            ),
            ("indirect", "community|social|culture|influence|affect", 1.5),
            ("local", "local|city|town|district|neighborhood", 1.0),
        ])
    })
}

pub fn temporal() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| {
        PatternSet::new(&[
            (
                "long_term",
                "future|permanent|lasting|years|decade|generation",
                3.0,
            ),
            ("medium_term", "month|quarterly|annual|upcoming|plan", 2.0),
            ("current", "current|ongoing|present|now|today", 1.5),
            ("short_term", "week|day|temporary|immediate", 1.0),
        ])
    })
}

pub fn questions() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| PatternSet::new(&[("inquiry", "why|how|what if|analyze|examine", 2.0)]))
}

pub fn perspectives() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| {
        PatternSet::new(&[
            (
                "multiple_views",
                "however|but|although|contrary|oppose|support|agree",
                2.0,
            ),
            (
                "group_perspectives",
                "group|community|society|people|public|population",
                1.0,
            ),
            (
                "power_relations",
                "authority|power|control|influence|leadership|position",
                1.0,
            ),
        ])
    })
}

pub fn resources() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| {
        PatternSet::new(&[
            (
                "economic",
                "economic|financial|cost|budget|money|fund|resource",
                2.0,
            ),
            (
                "material",
                "material|physical|concrete|tangible|infrastructure",
                1.0,
            ),
        ])
    })
}

pub fn practice() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    SET.get_or_init(|| {
        PatternSet::new(&[(
            "practical",
            "implement|practice|apply|use|effect|impact|result",
            1.0,
        )])
    })
}
