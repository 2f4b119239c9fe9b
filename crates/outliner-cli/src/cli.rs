use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract a document outline from a positioned-text page dump.
#[derive(Debug, Parser)]
#[command(name = "outliner", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the full outline (printed TOC first, heading heuristics as fallback)
    Outline {
        /// Path to the JSON page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Locate and parse the printed TOC only, reporting which pages it spans
    Toc {
        /// Path to the JSON page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for extraction results.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
}
