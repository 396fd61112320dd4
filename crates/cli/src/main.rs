//! Bangla Cleaner Entry Point

mod cli;
mod dataset;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use bangla_cleaner_config::{load_settings, Settings};
use bangla_cleaner_text_processing::{
    average_length_by_class, class_distribution, text_length_stats, CleaningPipeline,
    QualityReport,
};

use crate::cli::{AnalyzeArgs, CleanArgs, Cli, Commands, NormalizeArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: --config file > env vars > config/{env} > config/default > defaults
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match load_settings(cli.config_env.as_deref()) {
            Ok(settings) => settings,
            Err(e) => {
                // Tracing not yet initialized
                eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
                Settings::default()
            },
        },
    };

    init_tracing(&settings, cli.verbose);
    tracing::debug!(
        environment = ?settings.environment,
        config_env = cli.config_env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Clean(args) => run_clean(settings, args),
        Commands::Analyze(args) => run_analyze(settings, args),
        Commands::Normalize(args) => run_normalize(settings, args),
    }
}

fn init_tracing(settings: &Settings, verbose: u8) {
    let level = match verbose {
        0 => settings.observability.log_level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bangla_cleaner={}", level).into());

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_pipeline(settings: &Settings) -> Result<CleaningPipeline> {
    CleaningPipeline::new(settings.cleaner.clone()).context("loading linguistic resources")
}

fn run_clean(mut settings: Settings, args: CleanArgs) -> Result<()> {
    if let Some(column) = args.text_column {
        settings.cleaner.text_column = column;
    }
    let pipeline = build_pipeline(&settings)?;
    let rows = dataset::read_rows(&args.input)?;

    tracing::info!(
        input = %args.input.display(),
        records = rows.len(),
        column = %settings.cleaner.text_column,
        "Cleaning dataset"
    );
    let batch = pipeline.batch_cleaner().clean(rows);
    dataset::write_rows(&args.output, &batch.records)?;

    let report = serde_json::to_string_pretty(&batch.report)?;
    if let Some(path) = &args.report {
        std::fs::write(path, &report)
            .with_context(|| format!("writing report {}", path.display()))?;
    }
    println!("{}", report);
    Ok(())
}

fn run_analyze(mut settings: Settings, args: AnalyzeArgs) -> Result<()> {
    if let Some(column) = args.text_column {
        settings.cleaner.text_column = column;
    }
    if args.label_column.is_some() {
        settings.cleaner.label_column = args.label_column;
    }
    let rows = dataset::read_rows(&args.input)?;
    let text_column = settings.cleaner.text_column.as_str();

    let quality = QualityReport::analyze(&rows, text_column);
    let lengths = text_length_stats(&rows, text_column);
    let mut output = json!({
        "quality": quality,
        "na_percent": quality.na_percent(),
        "empty_percent": quality.empty_percent(),
        "duplicate_percent": quality.duplicate_percent(),
        "text_length": lengths,
    });

    if let Some(label_column) = settings.cleaner.label_column.as_deref() {
        output["class_distribution"] = json!(class_distribution(&rows, label_column));
        output["average_length_by_class"] =
            json!(average_length_by_class(&rows, text_column, label_column));
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_normalize(settings: Settings, args: NormalizeArgs) -> Result<()> {
    let pipeline = build_pipeline(&settings)?;
    if args.trace {
        let processed = pipeline.process(&args.text);
        for step in &processed.steps {
            println!("{:<34} {:?} -> {:?}", step.name, step.input, step.output);
        }
        println!("{}", processed.processed);
    } else {
        println!("{}", pipeline.clean(&args.text));
    }
    Ok(())
}
