//! CLI for the voxcheck voice-data verifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use voxcheck_core::config;

use commands::{run_check, run_checksum, run_list};

/// Top-level CLI for the voxcheck voice-data verifier.
#[derive(Debug, Parser)]
#[command(name = "voxcheck")]
#[command(about = "voxcheck: verify installed flite voices against the published manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify every voice in the manifest and report availability.
    Check {
        /// Override the configured voice data root.
        #[arg(long, value_name = "DIR")]
        data_root: Option<PathBuf>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the voices the cached manifest expects, without verifying files.
    List {
        /// Override the configured voice data root.
        #[arg(long, value_name = "DIR")]
        data_root: Option<PathBuf>,
    },

    /// Compute MD5 of a file (e.g. a freshly downloaded voice).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { data_root, json } => {
                if let Some(root) = data_root {
                    cfg.data_root = root;
                }
                run_check(&cfg, json)?;
            }
            CliCommand::List { data_root } => {
                if let Some(root) = data_root {
                    cfg.data_root = root;
                }
                run_list(&cfg)?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
