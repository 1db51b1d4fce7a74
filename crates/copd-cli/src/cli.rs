use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "copd-gold",
    version,
    about = "COPD assessment following the GOLD 2025 recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the derived assessment and treatment for a record.
    Assess {
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Output format (overrides the configured default).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Walk the wizard steps and report the first one that blocks.
    Validate {
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },

    /// Render the assessment report.
    Report {
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Write to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Assessment date, YYYY-MM-DD (defaults to today).
        #[arg(long, value_name = "DATE")]
        date: Option<Date>,
    },

    /// Print an empty record as JSON.
    Template,

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config.
    Show,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
