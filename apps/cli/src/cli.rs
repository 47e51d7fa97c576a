//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use modelspec_taxa::{ProviderConfig, DEFAULT_KB_URL, DEFAULT_WORMS_URL};

#[derive(Parser, Debug)]
#[command(name = "modelspec")]
#[command(about = "Resolve, check and print taxonomic classification models")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a model specification into a model
    Resolve(ResolveArgs),

    /// Print summary info and duplicated concepts of a model
    Check {
        /// Model file to check
        model: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a model in a human-readable format
    Print {
        /// Model file to print
        model: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Model specification file
    pub spec: PathBuf,

    /// Output file
    #[arg(short, long, global = true, default_value = "model.json")]
    pub output: PathBuf,

    /// Maximum number of classes resolved concurrently
    #[arg(long, global = true, env = "MODELSPEC_MAX_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// The taxa provider to use
    #[command(subcommand)]
    pub provider: ProviderCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    /// Resolve using the VARS knowledge base API
    Kb {
        /// Knowledge base URL
        #[arg(long, env = "MODELSPEC_KB_URL", default_value = DEFAULT_KB_URL)]
        url: String,
    },

    /// Resolve using the FathomNet WoRMS API
    Fathomnet {
        /// FathomNet WoRMS URL
        #[arg(long, env = "MODELSPEC_WORMS_URL", default_value = DEFAULT_WORMS_URL)]
        url: String,
    },
}

impl ProviderCommand {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Self::Kb { url } => ProviderConfig::Kb { url: url.clone() },
            Self::Fathomnet { url } => ProviderConfig::Worms { url: url.clone() },
        }
    }
}
