//! Command-line interface.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

use crate::application::{AnalyzeSurveyCommand, AnalyzeSurveyHandler};
use crate::bootstrap::{self, BootstrapError};
use crate::config::{AppConfig, ConfigError, ValidationError};
use crate::domain::analysis::{KeywordLexicon, KeywordOverlap, LexiconError, SurveyAnswers};
use crate::domain::foundation::Style;
use crate::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "learnstyle",
    about = "Infer a learner's dominant sensory learning style from survey answers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse one survey submission and print the result as JSON
    Analyze(AnalyzeArgs),
    /// Inspect keyword lexicons
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommand,
    },
    /// Report whether the external classifier is configured
    AiStatus,
}

#[derive(Subcommand, Debug)]
enum LexiconCommand {
    /// Validate a lexicon and list keywords that can never match
    Check(LexiconCheckArgs),
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    /// JSON object of question id to answer; `-` or omitted reads stdin
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug, Default)]
struct LexiconCheckArgs {
    /// Lexicon file; defaults to the configured or bundled lexicon
    #[arg(long)]
    path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AiStatus {
    ai_available: bool,
    classifier: String,
    model: String,
}

impl AiStatus {
    fn of(handler: &AnalyzeSurveyHandler) -> Self {
        let info = handler.classifier_info();
        Self {
            ai_available: handler.is_ai_available(),
            classifier: info.name,
            model: info.model,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LexiconReport<'a> {
    version: &'a str,
    negations: usize,
    keywords: Vec<(Style, usize)>,
    shadowed: Vec<(Style, &'a str)>,
    overlapping: Vec<KeywordOverlap<'a>>,
}

impl<'a> LexiconReport<'a> {
    fn of(lexicon: &'a KeywordLexicon) -> Self {
        Self {
            version: lexicon.version(),
            negations: lexicon.negations().len(),
            keywords: Style::ALL
                .into_iter()
                .map(|style| (style, lexicon.keywords(style).len()))
                .collect(),
            shadowed: lexicon.shadowed_keywords(),
            overlapping: lexicon.overlapping_keywords(),
        }
    }
}

/// Parses arguments, loads configuration and runs the command.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    match cli.command {
        Command::Analyze(args) => analyze(&config, args).await,
        Command::Lexicon {
            command: LexiconCommand::Check(args),
        } => check_lexicon(&config, args),
        Command::AiStatus => ai_status(&config),
    }
}

async fn analyze(config: &AppConfig, args: AnalyzeArgs) -> Result<(), CliError> {
    let handler = bootstrap::build_handler(config)?;
    let answers = read_answers(args.answers.as_ref())?;

    let result = handler.handle(AnalyzeSurveyCommand::new(answers)).await;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}

fn read_answers(path: Option<&PathBuf>) -> Result<SurveyAnswers, CliError> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_answers(&raw)
}

/// Blank input is an empty survey.
fn parse_answers(raw: &str) -> Result<SurveyAnswers, CliError> {
    if raw.trim().is_empty() {
        return Ok(SurveyAnswers::new());
    }
    Ok(serde_json::from_str(raw)?)
}

fn check_lexicon(config: &AppConfig, args: LexiconCheckArgs) -> Result<(), CliError> {
    let lexicon = match args.path {
        Some(path) => KeywordLexicon::from_path(path)?,
        None => bootstrap::load_lexicon(&config.analysis)?.as_ref().clone(),
    };

    println!("{}", serde_json::to_string_pretty(&LexiconReport::of(&lexicon))?);
    Ok(())
}

fn ai_status(config: &AppConfig) -> Result<(), CliError> {
    let handler = bootstrap::build_handler(config)?;
    println!("{}", serde_json::to_string(&AiStatus::of(&handler))?);
    Ok(())
}
