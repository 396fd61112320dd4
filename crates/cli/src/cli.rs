use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "bangla-cleaner",
    version,
    about = "Clean noisy Bangla social-media text datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config environment to layer over config/default (e.g. production).
    #[arg(global = true, long = "config-env", env = "BANGLA_CLEANER_ENV")]
    pub config_env: Option<String>,
    /// Single YAML or TOML config file, used instead of the config/ directory.
    #[arg(global = true, short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Increase logging verbosity (-v, -vv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean a JSON-lines dataset and report removed records.
    Clean(CleanArgs),
    /// Report quality, class distribution and text lengths of a dataset.
    Analyze(AnalyzeArgs),
    /// Clean a single text.
    Normalize(NormalizeArgs),
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input JSON-lines file, one object per line.
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output JSON-lines file for surviving records.
    #[arg(short, long)]
    pub output: PathBuf,
    /// Column holding the text (overrides config).
    #[arg(long = "text-column")]
    pub text_column: Option<String>,
    /// Write the cleaning report as JSON to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input JSON-lines file, one object per line.
    #[arg(short, long)]
    pub input: PathBuf,
    /// Column holding the text (overrides config).
    #[arg(long = "text-column")]
    pub text_column: Option<String>,
    /// Column holding class labels (overrides config).
    #[arg(long = "label-column")]
    pub label_column: Option<String>,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to clean.
    pub text: String,
    /// Print every stage that changed the text.
    #[arg(long)]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean() {
        let cli = Cli::try_parse_from([
            "bangla-cleaner",
            "-vv",
            "clean",
            "--input",
            "in.jsonl",
            "--output",
            "out.jsonl",
            "--text-column",
            "comment",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.input, PathBuf::from("in.jsonl"));
                assert_eq!(args.text_column.as_deref(), Some("comment"));
                assert!(args.report.is_none());
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_normalize_trace() {
        let cli = Cli::try_parse_from(["bangla-cleaner", "normalize", "--trace", "ভালো 😀"]).unwrap();
        match cli.command {
            Commands::Normalize(args) => {
                assert!(args.trace);
                assert_eq!(args.text, "ভালো 😀");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
