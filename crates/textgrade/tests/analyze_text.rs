//! End-to-end behaviour of the public grading entry point.

use textgrade::analysis::rubric::{Rubric, RubricError};
use textgrade::analysis::{DegenerateInput, RubricDefinition};
use textgrade::{analyze_text, Grade, MatchMode, TextAnalyzer};

const OP_ED: &str = "How will the new transit policy change daily life in the district? \
Advocates (Okafor, 2019) argue that public investment in physical infrastructure has a lasting, \
tangible effect on health, safety and education; however, critics oppose the budget, citing a \
12% cost overrun. \"We plan for the next generation,\" the city said in 2023.";

#[test]
fn two_sentence_text_without_domain_keywords_grades_e() {
    let result = analyze_text("This is a simple test. It has two sentences.");

    assert_eq!(result.metrics.word_stats.total, 9);
    assert_eq!(result.metrics.sentence_count(), 2);
    assert_eq!(result.metrics.citations.academic, 0);
    assert_eq!(result.metrics.impact.score, 0.0);
    assert_eq!(result.final_grade, Grade::E);
}

#[test]
fn single_citation_is_counted() {
    let result = analyze_text("Evidence is mixed (Smith, 2020).");
    assert_eq!(result.metrics.citations.academic, 1);
}

#[test]
fn empty_input_is_flagged_and_scored() {
    let result = analyze_text("");

    assert_eq!(result.final_grade, Grade::E);
    assert_eq!(result.metrics.word_stats.total, 0);
    assert_eq!(result.metrics.citations.references, 0);
    assert_eq!(result.metrics.numeric.numbers, 0);
    assert!(result.metrics.degenerate.contains(&DegenerateInput::NoWords));
    assert!(result
        .metrics
        .degenerate
        .contains(&DegenerateInput::NoSentences));
}

#[test]
fn richer_text_outscores_plain_text() {
    let plain = analyze_text("This is a simple test. It has two sentences.");
    let rich = analyze_text(OP_ED);

    assert!(rich.final_score > plain.final_score);
    assert!(rich.final_grade >= plain.final_grade);
    assert_eq!(rich.metrics.citations.academic, 1);
    assert_eq!(rich.metrics.numeric.percentages, 1);
}

#[test]
fn result_serializes_with_snake_case_keys() {
    let result = analyze_text(OP_ED);
    let json = serde_json::to_value(&result).expect("result serializes");

    assert!(json["final_score"].is_u64());
    assert_eq!(json["final_grade"], serde_json::json!(result.final_grade.to_string()));
    assert_eq!(json["categories"][0]["key"], "information_impact");
    assert!(json["metrics"]["word_stats"]["frequency"]["the"].is_u64());
    assert!(json["metrics"].get("degenerate").is_none());
}

#[test]
fn malformed_rubric_file_fails_at_load_time() {
    let dir = std::env::temp_dir().join(format!("textgrade-rubric-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");

    let missing = dir.join("missing.json");
    assert!(matches!(Rubric::from_path(&missing), Err(RubricError::Io(_))));

    let garbled = dir.join("garbled.json");
    std::fs::write(&garbled, "{ not json").expect("write rubric");
    assert!(matches!(Rubric::from_path(&garbled), Err(RubricError::Parse(_))));

    let mut definition = RubricDefinition::standard();
    definition.categories[2].criteria[1].analysis = Some("tone".to_string());
    let dangling = dir.join("dangling.json");
    std::fs::write(
        &dangling,
        serde_json::to_string(&definition).expect("definition serializes"),
    )
    .expect("write rubric");
    assert!(matches!(
        Rubric::from_path(&dangling),
        Err(RubricError::UnknownAnalysis { .. })
    ));

    let standard = dir.join("standard.json");
    std::fs::write(
        &standard,
        serde_json::to_string(&RubricDefinition::standard()).expect("definition serializes"),
    )
    .expect("write rubric");
    let rubric = Rubric::from_path(&standard).expect("standard rubric loads from disk");
    let analyzer = TextAnalyzer::new(rubric, MatchMode::EveryMatch);
    let loaded = analyzer.analyze(OP_ED);
    let built_in = analyze_text(OP_ED);
    assert_eq!(loaded.final_score, built_in.final_score);
    assert_eq!(loaded.final_grade, built_in.final_grade);

    std::fs::remove_dir_all(&dir).ok();
}
