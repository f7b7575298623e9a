//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pastefmt - Relative times and truncated titles for paste listings
#[derive(Debug, Parser)]
#[command(name = "pastefmt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "PASTEFMT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print how long ago each UNIX timestamp (epoch seconds) was
    Ago {
        /// Timestamps in epoch seconds
        #[arg(required = true, allow_negative_numbers = true)]
        timestamps: Vec<String>,

        /// Reference time in epoch seconds (defaults to the current time)
        #[arg(long, allow_negative_numbers = true)]
        now: Option<i64>,

        /// Reject malformed and future timestamps instead of printing them
        #[arg(long)]
        strict: bool,

        /// Output one JSON object per timestamp
        #[arg(long)]
        json: bool,
    },

    /// Truncate text with an ellipsis
    Truncate {
        /// Text to truncate; each line of stdin is truncated when omitted
        text: Option<String>,

        /// Maximum length before the ellipsis (negative values mark every text)
        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Measure length in UTF-16 code units instead of characters
        #[arg(long)]
        utf16: bool,

        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Dump,
    /// Validate the configuration
    Validate,
    /// Show the configuration file path
    Path,
}
