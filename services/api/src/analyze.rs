use crate::infra::parse_match_mode;
use crate::report::write_report;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use textgrade::config::AppConfig;
use textgrade::error::{AppError, InputError};
use textgrade::{telemetry, MatchMode};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Serialized score result
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// File to grade; reads standard input when omitted or '-'
    pub(crate) path: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Keyword counting mode ('every' or 'first'); overrides TEXTGRADE_MATCH_MODE
    #[arg(long, value_parser = parse_match_mode)]
    pub(crate) match_mode: Option<MatchMode>,
    /// Rubric definition (JSON); overrides TEXTGRADE_RUBRIC_PATH
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        path,
        format,
        match_mode,
        rubric,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(mode) = match_mode {
        config.analysis.match_mode = mode;
    }
    if let Some(rubric) = rubric {
        config.analysis.rubric_path = Some(rubric);
    }

    telemetry::init(&config.telemetry)?;

    let analyzer = config.analysis.build_analyzer()?;
    let text = read_input(path.as_deref())?;
    let result = analyzer.analyze(&text);

    info!(
        final_score = result.final_score,
        final_grade = %result.final_grade,
        "analysis complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_report(&mut out, &result, analyzer.match_mode())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => read_text(File::open(path)?),
        _ => read_text(io::stdin().lock()),
    }
}

/// Reads UTF-8 text, rejecting input that is empty or only whitespace.
pub(crate) fn read_text<R: Read>(mut reader: R) -> Result<String, AppError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = String::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding)?;
    if text.trim().is_empty() {
        return Err(InputError::Empty.into());
    }
    Ok(text)
}
