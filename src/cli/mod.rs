//! CLI module for Radgate
//!
//! Command-line interface definitions and handlers for the radiation gateway.
//!
//! # Commands
//!
//! - `serve` - Start the Radgate server
//! - `status` - Query a running instance and print current dose metrics
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! radgate serve
//!
//! # Check the sensor from a terminal
//! radgate status --url http://rad.example.org
//!
//! # Generate shell completions
//! radgate completions bash > ~/.bash_completion.d/radgate
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod serve;
pub mod status;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Radgate - Radiation monitoring gateway
#[derive(Parser, Debug)]
#[command(
    name = "radgate",
    version,
    about = "Radiation monitoring gateway for Geiger counter devices"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Radgate server
    Serve(ServeArgs),
    /// Show current dose metrics from a running instance
    Status(StatusArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "radgate.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "RADGATE_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(long, env = "RADGATE_HOST")]
    pub host: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Base URL of the running instance
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub url: String,

    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "radgate.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
