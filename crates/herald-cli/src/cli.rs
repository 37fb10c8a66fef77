//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Herald CLI - analyze a document with AI and trigger a conditional alert email.
#[derive(Debug, Parser)]
#[command(name = "herald")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a document and analyze it against a question
    Analyze(AnalyzeArgs),

    /// Analyze a document and forward the result to the alert automation
    Send(SendArgs),

    /// Manage configuration (API key, webhook URL, model)
    Config(ConfigArgs),

    /// Enter the interactive session
    Session,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Document to analyze (PDF or TXT)
    pub file: PathBuf,

    /// Analytical question about the document
    #[arg(short, long)]
    pub question: String,

    /// Skip the extracted-text preview
    #[arg(long)]
    pub no_preview: bool,
}

/// Arguments for the send command.
#[derive(Debug, Parser)]
pub struct SendArgs {
    /// Document to analyze (PDF or TXT)
    pub file: PathBuf,

    /// Analytical question about the document
    #[arg(short, long)]
    pub question: String,

    /// Recipient for the conditional alert email
    #[arg(short, long)]
    pub to: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration (secrets masked)
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Key to set (e.g. completion.api_key, automation.webhook_url)
        key: String,
        /// New value
        value: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
