//! CLI for the mediagrab page media-link grabber.

mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mediagrab_core::config;

use commands::{run_find_url, run_grab, run_share};

/// Top-level CLI for mediagrab.
#[derive(Debug, Parser)]
#[command(name = "mediagrab")]
#[command(about = "mediagrab: find direct audio/video links on a web page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page through the proxy and list its media sources.
    Grab {
        /// URL of the page to scan.
        url: String,

        /// Collapse duplicate results (same URL and kind).
        #[arg(long)]
        unique: bool,

        /// Print results as JSON instead of a plain list.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a shared address (link/description params) and grab it.
    Share {
        /// The share-target address, query parameters included.
        address: String,

        /// Collapse duplicate results (same URL and kind).
        #[arg(long)]
        unique: bool,

        /// Print results as JSON instead of a plain list.
        #[arg(long)]
        json: bool,
    },

    /// Print the first URL found in the given text.
    FindUrl {
        /// Arbitrary text to search.
        text: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Load global config early; fetch and rendering options come from it.
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab { url, unique, json } => {
                run_grab(&cfg, &url, unique || cfg.unique_results, json)
            }
            CliCommand::Share {
                address,
                unique,
                json,
            } => run_share(&cfg, &address, unique || cfg.unique_results, json),
            CliCommand::FindUrl { text } => run_find_url(&text),
        }
    }
}
