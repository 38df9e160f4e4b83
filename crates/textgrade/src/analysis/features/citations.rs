use super::tokens::bracket_span_pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CitationCounts {
    /// Author-year citations such as `(Smith, 2020)`.
    pub academic: usize,
    /// Quote pairs; half the number of quote characters.
    pub quotes: f64,
    /// Any bracketed span with content.
    pub references: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericContent {
    pub numbers: usize,
    pub percentages: usize,
    pub dates: usize,
}

fn academic_pattern() -> &'static Regex {
    static ACADEMIC: OnceLock<Regex> = OnceLock::new();
    ACADEMIC.get_or_init(|| {
        Regex::new(r"[(\[{][\p{L}\s]+,?\s*[0-9]{4}[)\]}]").expect("citation pattern compiles")
    })
}

/// ASCII double quote and apostrophe, guillemets and CJK corner brackets.
fn quote_pattern() -> &'static Regex {
    static QUOTE: OnceLock<Regex> = OnceLock::new();
    QUOTE.get_or_init(|| Regex::new(r#"["'«»『』「」]"#).expect("quote pattern compiles"))
}

fn number_pattern() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number pattern compiles"))
}

fn percentage_pattern() -> &'static Regex {
    static PERCENTAGE: OnceLock<Regex> = OnceLock::new();
    PERCENTAGE
        .get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?%").expect("percentage pattern compiles"))
}

fn date_pattern() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| {
        Regex::new(r"[0-9]{4}|[0-9]{1,2}/[0-9]{1,2}(?:/[0-9]{2,4})?").expect("date pattern compiles")
    })
}

pub fn citation_counts(text: &str) -> CitationCounts {
    CitationCounts {
        academic: academic_pattern().find_iter(text).count(),
        quotes: quote_pattern().find_iter(text).count() as f64 / 2.0,
        references: bracket_span_pattern().find_iter(text).count(),
    }
}

pub fn numeric_content(text: &str) -> NumericContent {
    NumericContent {
        numbers: number_pattern().find_iter(text).count(),
        percentages: percentage_pattern().find_iter(text).count(),
        dates: date_pattern().find_iter(text).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_year_citation_is_academic_and_a_reference() {
        let counts = citation_counts("As shown earlier (Smith, 2020), rents rose.");
        assert_eq!(counts.academic, 1);
        assert_eq!(counts.references, 1);
        assert_eq!(counts.quotes, 0.0);
    }

    #[test]
    fn multi_author_citation_without_comma() {
        let counts = citation_counts("[Garcia Lopez 1999] and {notes}");
        assert_eq!(counts.academic, 1);
        assert_eq!(counts.references, 2);
    }

    #[test]
    fn quotes_are_counted_in_pairs() {
        let counts = citation_counts("«François Bayrou a trahi» and 「one more」 then \"x");
        assert_eq!(counts.quotes, 2.5);
    }

    #[test]
    fn apostrophes_count_as_quote_characters() {
        let counts = citation_counts("It's 'fine' and «ok»");
        assert_eq!(counts.quotes, 2.5);
    }

    #[test]
    fn typographic_curly_quotes_are_not_counted() {
        assert_eq!(citation_counts("“one” ‘two’").quotes, 0.0);
    }

    #[test]
    fn numeric_content_counts_numbers_percentages_and_dates() {
        let numeric = numeric_content("Up 12.5% since 2019, due 3/14/2024.");
        assert_eq!(numeric.numbers, 5);
        assert_eq!(numeric.percentages, 1);
        assert_eq!(numeric.dates, 2);
    }

    #[test]
    fn plain_prose_has_no_numeric_content() {
        assert_eq!(numeric_content("no digits here"), NumericContent::default());
    }
}
