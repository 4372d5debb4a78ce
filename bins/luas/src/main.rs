//! Luas - area calculator and map marker tool
//!
//! Calculates the area of nine plane shapes from typed dimensions, converts
//! between length units, and keeps a board of map markers.

use clap::{Parser, Subcommand};
use luas_cli::errors::print_error;
use luas_cli::OutputFormat;
use luas_core::config::Config;
use luas_core::Error;
use luas_telemetry::{metrics, TelemetryConfig};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;

use commands::{calc, convert, format, map, session, shapes, units, Context};

/// Area calculator and map marker tool
#[derive(Parser)]
#[command(name = "luas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .luas.toml, luas.toml or .config/luas.toml)
    #[arg(short, long, global = true, env = "LUAS_CONFIG")]
    config: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported shapes and their input fields
    Shapes,

    /// List the supported length units
    Units,

    /// Calculate the area of one shape
    Calc(calc::CalcArgs),

    /// Convert a length between units
    Convert(convert::ConvertArgs),

    /// Format a number the way results are displayed
    Format(format::FormatArgs),

    /// Interactive calculator for one shape, driven from stdin
    Session(session::SessionArgs),

    /// Interactive map marker board, driven from stdin
    Map,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e, cli.format);
            return exit_code(e.exit_code());
        }
    };

    let telemetry =
        TelemetryConfig::with_level(config.schema.telemetry.log_level.clone()).verbosity(cli.verbose);
    if let Err(e) = luas_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
    tracing::debug!(path = ?config.path, "configuration loaded");

    let ctx = Context::new(&config.schema, cli.format);
    let result = match cli.command {
        Commands::Shapes => shapes::run(&ctx),
        Commands::Units => units::run(&ctx),
        Commands::Calc(args) => calc::run(&ctx, args),
        Commands::Convert(args) => convert::run(&ctx, args),
        Commands::Format(args) => format::run(&ctx, args),
        Commands::Session(args) => session::run(&ctx, args),
        Commands::Map => map::run(&ctx).await,
    };

    tracing::debug!(metrics = %metrics().export_json(), "run finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<Error>() {
            Some(error) => {
                print_error(error, cli.format);
                exit_code(error.exit_code())
            }
            None => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                ExitCode::FAILURE
            }
        },
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
