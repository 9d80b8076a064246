mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nhakhoa_forms::{AppConfig, SchemaKind};
use nhakhoa_validation::Locale;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nhakhoa")]
#[command(version, about = "Validate clinic form data against the predefined schemas", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "nhakhoa.toml")]
    config: PathBuf,

    /// Message language (vi, en); overrides the config file
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record against a schema
    Validate {
        /// Schema: account, clinic, service or appointment
        schema: SchemaKind,

        /// JSON file holding one record, or - for stdin
        input: PathBuf,

        /// Print the error map as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the predefined schemas and their rules
    Schemas,

    /// Show the stored session
    Session {
        /// Session key (defaults to the configured one)
        #[arg(short, long)]
        key: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(locale) = cli.locale {
        config.validation.locale = locale;
    }

    // Execute command
    let code = match cli.command {
        Commands::Validate {
            schema,
            input,
            json,
        } => commands::validate::execute(&config, schema, &input, json)?,
        Commands::Schemas => commands::schemas::execute(&config)?,
        Commands::Session { key } => commands::session::execute(&config, key.as_deref())?,
    };

    Ok(code)
}
