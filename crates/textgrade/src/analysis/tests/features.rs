use super::common::*;
use crate::analysis::features::{extract_features, DegenerateInput, MatchMode};

#[test]
fn simple_text_counts_words_and_sentences() {
    let metrics = extract_features(SIMPLE, MatchMode::EveryMatch);

    assert_eq!(metrics.word_stats.total, 9);
    assert_eq!(metrics.word_stats.unique, 9);
    assert_eq!(metrics.sentence_count(), 2);
    assert_eq!(metrics.citations.academic, 0);
    assert_eq!(metrics.citations.references, 0);
    assert_eq!(metrics.citations.quotes, 0.0);
    assert_eq!(metrics.impact.score, 0.0);
    assert!(!metrics.is_degenerate());
}

#[test]
fn author_year_citation_is_detected_once() {
    let metrics = extract_features(
        "Rents rose sharply (Smith, 2020) across the region.",
        MatchMode::EveryMatch,
    );

    assert_eq!(metrics.citations.academic, 1);
    assert_eq!(metrics.citations.references, 1);
    assert_eq!(metrics.symbolic.authority_score, 5.0);
}

#[test]
fn empty_text_yields_zeroed_metrics_and_degenerate_flags() {
    let metrics = extract_features("", MatchMode::EveryMatch);

    assert_eq!(metrics.word_stats.total, 0);
    assert_eq!(metrics.word_stats.ratio, 0.0);
    assert!(metrics.sentences.is_empty());
    assert_eq!(metrics.average_complexity, 0.0);
    assert_eq!(metrics.dialectical.question_score, 0.0);
    assert_eq!(metrics.numeric.numbers, 0);
    assert_eq!(
        metrics.degenerate,
        vec![DegenerateInput::NoWords, DegenerateInput::NoSentences]
    );
}

#[test]
fn unterminated_text_has_words_but_no_sentences() {
    let metrics = extract_features("just some words", MatchMode::EveryMatch);

    assert_eq!(metrics.word_stats.total, 3);
    assert_eq!(metrics.degenerate, vec![DegenerateInput::NoSentences]);
    assert_eq!(metrics.average_complexity, 0.0);
}

#[test]
fn degenerate_flags_display_as_their_json_names() {
    for flag in [DegenerateInput::NoWords, DegenerateInput::NoSentences] {
        let json = serde_json::to_string(&flag).expect("flag serializes");
        assert_eq!(json, format!("\"{flag}\""));
    }
}

#[test]
fn vocabulary_ratio_stays_within_unit_interval() {
    for text in samples() {
        let stats = extract_features(text, MatchMode::EveryMatch).word_stats;
        assert!(stats.unique <= stats.total, "unique > total for {text:?}");
        assert!((0.0..=1.0).contains(&stats.ratio), "ratio out of range for {text:?}");
        if stats.total == 0 {
            assert_eq!(stats.ratio, 0.0);
        }
    }
}

// First-match counting is kept as a selectable mode; these counts must stay capped at one.
#[test]
fn first_match_mode_caps_keyword_counts() {
    let metrics = extract_features(ESSAY, MatchMode::FirstMatch);

    for bundle in [
        &metrics.impact,
        &metrics.temporal,
        &metrics.dialectical.questions,
        &metrics.social.perspectives,
        &metrics.material.resources,
        &metrics.material.practice,
    ] {
        assert!(bundle.counts.values().all(|&count| count <= 1));
    }
    assert_eq!(metrics.impact.count("direct_life"), 1);

    let every = extract_features(ESSAY, MatchMode::EveryMatch);
    assert!(every.impact.count("direct_life") >= 3);
    assert!(every.impact.score > metrics.impact.score);
}

#[test]
fn non_keyword_signals_ignore_match_mode() {
    let every = extract_features(ESSAY, MatchMode::EveryMatch);
    let first = extract_features(ESSAY, MatchMode::FirstMatch);

    assert_eq!(every.word_stats, first.word_stats);
    assert_eq!(every.sentences, first.sentences);
    assert_eq!(every.citations, first.citations);
    assert_eq!(every.numeric, first.numeric);
    assert_eq!(every.symbolic, first.symbolic);
}

#[test]
fn essay_exposes_structure_signals() {
    let metrics = extract_features(ESSAY, MatchMode::EveryMatch);

    assert_eq!(metrics.citations.academic, 2);
    assert_eq!(metrics.citations.references, 3);
    assert_eq!(metrics.citations.quotes, 1.0);
    assert_eq!(metrics.numeric.percentages, 1);
    assert!(metrics.social.dialogue_score >= 2);
    assert!(metrics.dialectical.argument_score >= 1);
    assert!(metrics.material.practical_score >= metrics.numeric.numbers as f64);
}
