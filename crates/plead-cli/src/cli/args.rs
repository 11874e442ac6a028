use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plead",
    version,
    about = "Retaliation-claim plausibility screener — three questions, one ruling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Answer the three claim questions interactively
    Run(RunArgs),
    /// Score a prepared answers file
    Score(ScoreArgs),
    /// List the claim elements and their questions
    Prompts,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoreArgs {
    /// YAML list of {element, text} entries in element order
    #[arg(long, default_value = "answers.yaml")]
    pub answers: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
