//! StopScout CLI
//!
//! Command-line interface for one-off lookups and configuration checks.

#![allow(clippy::print_stdout)]

mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, TelemetryAppConfig, build_enrichment_service, init_tracing};

/// Place looked up when none is given
const DEFAULT_PLACE: &str = "Wellesley";

/// StopScout CLI
#[derive(Parser)]
#[command(name = "stopscout-cli")]
#[command(author, version, about = "Find the nearest MBTA stop for a place", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a place and print the nearest stop, events and weather
    ///
    /// Example: stopscout-cli enrich "Boston Common"
    Enrich {
        /// Free-text place name
        #[arg(default_value = DEFAULT_PLACE)]
        place: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate configuration, reporting which credentials are set
    CheckConfig,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&TelemetryAppConfig {
        level: log_filter_from_verbosity(cli.verbose).to_string(),
        format: config.telemetry.format,
    })
    .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Enrich { place, json } => {
            config.validate().context("Invalid configuration")?;

            let service = build_enrichment_service(&config)
                .context("Failed to initialize enrichment service")?;

            let result = service.enrich(&place).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!(
                    "{}",
                    report::enrichment_report(&result, config.weather.units.symbol())
                );
            }
        },

        Commands::CheckConfig => {
            println!("Credentials:");
            print!("{}", report::credentials_report(&config.credentials));
            println!("Weather units: {}", config.weather.units);
            println!("Event radius: {}", config.events.radius);

            config.validate().context("Invalid configuration")?;
            println!("Configuration OK");
        },
    }

    Ok(())
}
