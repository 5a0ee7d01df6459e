//! CLI for the PMC collection editor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pmc_core::config;
use pmc_core::scaffold::{DEFAULT_BASE_URL, DEFAULT_DESCRIPTION, DEFAULT_NAME};
use std::path::PathBuf;

use commands::{run_apply, run_init, run_list, run_remove, run_set_variable, InitArgs};

/// Top-level CLI for the PMC collection editor.
#[derive(Debug, Parser)]
#[command(name = "pmc")]
#[command(about = "PMC: edit Postman collections in place", long_about = None)]
pub struct Cli {
    /// Collection file to edit (default from config: Tymbl.postman_collection.json).
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create a new collection with no sections and the default variables.
    Init {
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,
        #[arg(long, default_value = DEFAULT_DESCRIPTION)]
        description: String,
        /// Value of the `base_url` collection variable.
        #[arg(long, default_value = DEFAULT_BASE_URL, value_name = "URL")]
        base_url: String,
        /// Overwrite an existing collection file.
        #[arg(long)]
        force: bool,
    },

    /// Apply one or more patch files in order, then save once.
    Apply {
        /// Patch files (JSON).
        #[arg(required = true, value_name = "PATCH")]
        patches: Vec<PathBuf>,
        /// Print what would change without writing the collection.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the section tree and the endpoint count.
    List,

    /// Remove an endpoint (every entry with that name) from a section.
    Remove {
        /// Section path, nested levels separated by '/' (e.g. "AI & Utilities/AIController").
        section: String,
        /// Endpoint name.
        endpoint: String,
    },

    /// Set a collection variable, adding it if missing.
    SetVariable {
        key: String,
        value: String,
        /// Variable type (Postman: string, boolean, number, secret, ...).
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let file = cli.file.unwrap_or_else(|| cfg.collection_file.clone());

        match cli.command {
            CliCommand::Init {
                name,
                description,
                base_url,
                force,
            } => {
                let args = InitArgs {
                    name,
                    description,
                    base_url,
                    force,
                };
                run_init(&file, &args, &cfg)?;
            }
            CliCommand::Apply { patches, dry_run } => run_apply(&file, &patches, dry_run, &cfg)?,
            CliCommand::List => run_list(&file)?,
            CliCommand::Remove { section, endpoint } => {
                run_remove(&file, &section, &endpoint, &cfg)?
            }
            CliCommand::SetVariable { key, value, kind } => {
                run_set_variable(&file, &key, &value, kind.as_deref(), &cfg)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
