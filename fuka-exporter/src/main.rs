use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use fuka_exporter::commands;

#[derive(Parser)]
#[command(
    name = "fuka-exporter",
    about = "Tooling for FUKA binary initial data level files",
    version
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the variables stored in a level file
    Inspect {
        /// Level file to read
        file: PathBuf,
    },

    /// Read a level file and rewrite it in canonical form
    Copy {
        /// Level file to read
        input: PathBuf,
        /// Destination path (created or truncated)
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Inspect { file } => commands::inspect(&file)?,
        Commands::Copy { input, output } => commands::copy(&input, &output)?,
    }

    Ok(())
}
