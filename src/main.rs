//! vdd command line.
//!
//! Usage:
//!   vdd extract [--path coda.yaml] [--layout compact]   # Print the CODA model as JSON
//!   vdd score [--path weights.yaml]                     # Print requirement weights
//!   vdd weigh [--path weights.yaml] [--no-shuffle]      # Ask pairwise questions, save, print weights
//!
//! Paths and defaults come from `VDD__*` environment variables (see `vdd::config`)
//! and may be overridden per command.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use vdd::adapters::{FileGrid, GridCodaSheet, GridWeightingSheet, StdioPrompt};
use vdd::application::{ElicitWeightsHandler, ExtractModelHandler, ScoreRequirementsHandler};
use vdd::config::{AppConfig, LoggingConfig};
use vdd::domain::coda::CodaLayout;

#[derive(Parser)]
#[command(name = "vdd")]
#[command(about = "Requirements model extraction and binary weighting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a CODA model from a sheet and print it as JSON
    Extract {
        /// Sheet file (overrides VDD__WORKBOOK__PATH)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Sheet layout: full, compact or collaborative
        #[arg(short, long)]
        layout: Option<CodaLayout>,
    },

    /// Score a filled-in binary weighting matrix
    Score {
        /// Sheet file (overrides VDD__WEIGHTING__PATH)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Elicit pairwise decisions on the console, save them and print the weights
    Weigh {
        /// Sheet file (overrides VDD__WEIGHTING__PATH)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Ask questions in canonical order
        #[arg(long)]
        no_shuffle: bool,
    },
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn run(command: Command, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Extract { path, layout } => {
            let path = match path {
                Some(path) => path,
                None => config.workbook.require_path()?.to_path_buf(),
            };
            let layout = layout.unwrap_or(config.workbook.layout);

            let sheet = GridCodaSheet::new(FileGrid::new(&path)?, layout);
            let result = ExtractModelHandler::new(sheet).handle()?;
            println!("{}", serde_json::to_string_pretty(&result.model)?);
        }

        Command::Score { path } => {
            let path = match path {
                Some(path) => path,
                None => config.weighting.require_path()?.to_path_buf(),
            };

            let sheet =
                GridWeightingSheet::with_anchor(FileGrid::new(&path)?, config.weighting.anchor_cell()?);
            let report = ScoreRequirementsHandler::new(sheet).handle()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Command::Weigh { path, no_shuffle } => {
            let path = match path {
                Some(path) => path,
                None => config.weighting.require_path()?.to_path_buf(),
            };

            let sheet =
                GridWeightingSheet::with_anchor(FileGrid::new(&path)?, config.weighting.anchor_cell()?);
            let mut prompt = StdioPrompt::stdio();
            let report = ElicitWeightsHandler::new(sheet)
                .with_shuffle(config.weighting.shuffle && !no_shuffle)
                .handle(&mut prompt)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
