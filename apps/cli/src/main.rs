//! `modelspec` - resolve taxonomic classification models.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a spec against the VARS knowledge base
//! modelspec resolve spec.json -o model.json kb --url http://dsg.mbari.org/kb/v1
//!
//! # Resolve against FathomNet WoRMS
//! modelspec resolve spec.json fathomnet
//!
//! # Look for concepts assigned to several classes
//! modelspec check model.json
//!
//! # List every class and its concepts
//! modelspec print model.json
//! ```

mod cli;
mod commands;
mod config;
mod main_lib;

use clap::Parser;

use cli::{Cli, Command};
use config::Config;
use main_lib::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    match &cli.command {
        Command::Resolve(args) => commands::resolve(args, &config).await,
        Command::Check { model, json } => commands::check(model, *json),
        Command::Print { model } => commands::print(model),
    }
}
