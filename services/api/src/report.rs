use std::io::{self, Write};
use textgrade::{MatchMode, ScoreResult};

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    result: &ScoreResult,
    match_mode: MatchMode,
) -> io::Result<()> {
    let metrics = &result.metrics;

    writeln!(out, "Text analysis report")?;
    writeln!(out, "Keyword counting: {match_mode}")?;

    writeln!(out, "\nWord statistics")?;
    writeln!(out, "- Total words: {}", metrics.word_stats.total)?;
    writeln!(out, "- Unique words: {}", metrics.word_stats.unique)?;
    writeln!(
        out,
        "- Vocabulary diversity: {:.2}%",
        metrics.word_stats.ratio * 100.0
    )?;

    writeln!(out, "\nSentence analysis")?;
    writeln!(
        out,
        "- Average sentence complexity: {:.2}",
        metrics.average_complexity
    )?;
    writeln!(out, "- Number of sentences: {}", metrics.sentence_count())?;

    writeln!(out, "\nCitation analysis")?;
    writeln!(out, "- Academic citations: {}", metrics.citations.academic)?;
    writeln!(out, "- Quotes: {}", metrics.citations.quotes)?;
    writeln!(out, "- References: {}", metrics.citations.references)?;

    writeln!(out, "\nArgument structure")?;
    writeln!(
        out,
        "- Question score: {:.2}",
        metrics.dialectical.question_score
    )?;
    writeln!(
        out,
        "- Complex sentences: {}",
        metrics.dialectical.argument_score
    )?;

    writeln!(out, "\nCategory scores")?;
    for category in &result.categories {
        writeln!(
            out,
            "- {} [{}] total {:.2}",
            category.key,
            category.headline_grade(),
            category.total
        )?;
        for criterion in &category.criteria {
            writeln!(
                out,
                "    {}: {} ({}/5)",
                criterion.key, criterion.grade, criterion.points
            )?;
        }
    }

    if metrics.is_degenerate() {
        let flags: Vec<String> = metrics
            .degenerate
            .iter()
            .map(|flag| flag.to_string())
            .collect();
        writeln!(out, "\nDegenerate input: {}", flags.join(", "))?;
    }

    writeln!(out, "\nFinal results")?;
    writeln!(out, "- Score: {}/100", result.final_score)?;
    writeln!(
        out,
        "- Grade: {} ({})",
        result.final_grade,
        result.final_grade.label()
    )?;

    Ok(())
}
