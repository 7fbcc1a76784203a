//! # lgpd CLI entry point
//!
//! Parses command-line arguments, loads the presentation configuration
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lgpd_cli::evaluate::{run_evaluate, EvaluateArgs};
use lgpd_cli::questions::{run_glossary, run_questions, GlossaryArgs, QuestionsArgs};
use lgpd_cli::template::{run_template, TemplateArgs};
use lgpd_core::TriageConfig;

/// LGPD self-assessment for small processing agents.
///
/// Preliminary screening based on Resolution CD/ANPD nº 2/2022 for
/// microenterprises, small businesses and startups. Does not replace
/// legal advice.
#[derive(Parser, Debug)]
#[command(name = "lgpd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file (links and template location).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the questionnaire and print the diagnosis.
    Evaluate(EvaluateArgs),

    /// Print the questionnaire.
    Questions(QuestionsArgs),

    /// Print the glossary of terms.
    Glossary(GlossaryArgs),

    /// Export the INV-01 register template.
    Template(TemplateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match TriageConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args, &config, &mut stdout),
        Commands::Questions(args) => run_questions(&args, &mut stdout),
        Commands::Glossary(args) => run_glossary(&args, &mut stdout),
        Commands::Template(args) => run_template(&args, &config, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
