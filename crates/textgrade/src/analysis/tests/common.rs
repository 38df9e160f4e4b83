use crate::analysis::{MatchMode, Rubric, TextAnalyzer};

pub(super) const SIMPLE: &str = "This is a simple test. It has two sentences.";

pub(super) const IMPACT_HEADLINE: &str = "health and safety crisis policy reform";

pub(super) const ESSAY: &str = "Why does the housing crisis persist in our city? \
Economic analysis (Smith, 2020) suggests that the cost of infrastructure, the budget of the \
local government, and the lasting influence of zoning law all shape the outcome; however, \
community groups oppose the current policy. Over the next decade, 35% of the public fund \
could support health and safety programs (see Table 2). \"Reform is a generation-long \
effort,\" one district leader said in 2021, although others agree only in part.\n\
How should people examine the power of authority in this system? Annual plans, quarterly \
reports and temporary measures each have a tangible, practical effect [Garcia, 2018].";

pub(super) const FRENCH: &str = "En s'opposant au retour de la retraite à 62 ans, «François \
Bayrou a trahi les Français», cingle Olivier Faure. Le gouvernement prépare une réforme.";

pub(super) const CJK: &str = "東京の人口は増えている。政策（住宅、交通）も変わる！";

pub(super) fn samples() -> Vec<&'static str> {
    vec!["", "   ", "\n\n", SIMPLE, IMPACT_HEADLINE, ESSAY, FRENCH, CJK, "(((", "1/2/3 4.5% 2024"]
}

pub(super) fn standard_analyzer() -> TextAnalyzer {
    TextAnalyzer::standard().expect("standard rubric is valid")
}

pub(super) fn first_match_analyzer() -> TextAnalyzer {
    TextAnalyzer::new(
        Rubric::standard().expect("standard rubric is valid"),
        MatchMode::FirstMatch,
    )
}
