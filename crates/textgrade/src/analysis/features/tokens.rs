use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Vocabulary statistics. `unique` compares tokens exactly, `frequency` folds case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordStats {
    pub total: usize,
    pub unique: usize,
    pub ratio: f64,
    pub frequency: BTreeMap<String, usize>,
}

/// Structure signals for a single sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceComplexity {
    pub word_count: usize,
    pub punctuation_count: usize,
    pub parenthetical_count: usize,
    pub complexity: f64,
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern compiles"))
}

fn sentence_pattern() -> &'static Regex {
    static SENTENCE: OnceLock<Regex> = OnceLock::new();
    SENTENCE.get_or_init(|| {
        Regex::new(r"[^.!?。．？！\n]+[.!?。．？！\n]+").expect("sentence pattern compiles")
    })
}

fn clause_punctuation_pattern() -> &'static Regex {
    static CLAUSE: OnceLock<Regex> = OnceLock::new();
    CLAUSE.get_or_init(|| Regex::new(r"[,;:，；：]").expect("clause pattern compiles"))
}

/// Bracketed span with a non-empty interior. Nesting is not tracked.
pub(crate) fn bracket_span_pattern() -> &'static Regex {
    static BRACKET: OnceLock<Regex> = OnceLock::new();
    BRACKET.get_or_init(|| Regex::new(r"[(\[{][^)\]}]+[)\]}]").expect("bracket pattern compiles"))
}

/// Words are maximal runs of letters or digits in any script.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_pattern().find_iter(text).map(|found| found.as_str())
}

/// Sentences are runs of non-terminators closed by one or more terminators. Trailing text
/// without a terminator is not a sentence.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    sentence_pattern().find_iter(text).map(|found| found.as_str())
}

pub fn word_stats(text: &str) -> WordStats {
    let mut total = 0;
    let mut distinct = BTreeSet::new();
    let mut frequency = BTreeMap::new();

    for word in words(text) {
        total += 1;
        distinct.insert(word);
        *frequency.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let unique = distinct.len();
    let ratio = if total > 0 {
        unique as f64 / total as f64
    } else {
        0.0
    };

    WordStats {
        total,
        unique,
        ratio,
        frequency,
    }
}

pub fn measure_sentence(sentence: &str) -> SentenceComplexity {
    let word_count = words(sentence).count();
    let punctuation_count = clause_punctuation_pattern().find_iter(sentence).count();
    let parenthetical_count = bracket_span_pattern().find_iter(sentence).count();
    let complexity = word_count as f64
        * (1.0 + punctuation_count as f64 / 5.0 + parenthetical_count as f64 / 2.0);

    SentenceComplexity {
        word_count,
        punctuation_count,
        parenthetical_count,
        complexity,
    }
}

pub fn sentence_complexity(text: &str) -> Vec<SentenceComplexity> {
    sentences(text).map(measure_sentence).collect()
}

/// Mean complexity, or 0 when there are no sentences.
pub fn average_complexity(sentences: &[SentenceComplexity]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let sum: f64 = sentences.iter().map(|sentence| sentence.complexity).sum();
    sum / sentences.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_ignore_whitespace_and_punctuation() {
        let collected: Vec<&str> = words("Hello, world! 42 times—again").collect();
        assert_eq!(collected, vec!["Hello", "world", "42", "times", "again"]);
    }

    #[test]
    fn words_cover_scripts_without_spaces() {
        assert_eq!(words("東京は大きい。").count(), 1);
        assert_eq!(words("naïve café").count(), 2);
    }

    #[test]
    fn word_stats_counts_exact_tokens_and_folds_frequency() {
        let stats = word_stats("The cat saw the cat");
        assert_eq!(stats.total, 5);
        assert_eq!(stats.unique, 4);
        assert!((stats.ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(stats.frequency.get("the"), Some(&2));
        assert_eq!(stats.frequency.get("cat"), Some(&2));
    }

    #[test]
    fn empty_text_has_zero_ratio() {
        let stats = word_stats("");
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique, 0);
        assert_eq!(stats.ratio, 0.0);
        assert!(stats.frequency.is_empty());
    }

    #[test]
    fn sentences_split_on_latin_and_cjk_terminators() {
        let collected: Vec<&str> = sentences("One. Two?! 三。Four\nfive").collect();
        assert_eq!(collected, vec!["One.", " Two?!", " 三。", "Four\n"]);
    }

    #[test]
    fn sentence_complexity_weights_clauses_and_parentheticals() {
        let measured = measure_sentence("Cities grow, shrink; and (sometimes) vanish.");
        assert_eq!(measured.word_count, 6);
        assert_eq!(measured.punctuation_count, 2);
        assert_eq!(measured.parenthetical_count, 1);
        assert!((measured.complexity - 6.0 * (1.0 + 0.4 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn empty_brackets_are_not_parentheticals() {
        assert_eq!(measure_sentence("Call f() now.").parenthetical_count, 0);
    }

    #[test]
    fn average_complexity_guards_empty_input() {
        assert_eq!(average_complexity(&[]), 0.0);
        let measured = sentence_complexity("A b c. D e.");
        assert!((average_complexity(&measured) - 2.5).abs() < 1e-9);
    }
}
