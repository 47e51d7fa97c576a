//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use modelspec_model::io::{load_model, load_model_spec, write_model};
use modelspec_model::{ModelListing, ModelResolver, OverlapCheck};
use modelspec_taxa::build_provider;
use tracing::info;

use crate::cli::ResolveArgs;
use crate::config::Config;

pub async fn resolve(args: &ResolveArgs, config: &Config) -> Result<()> {
    let spec = load_model_spec(&args.spec)?;
    let provider = build_provider(&args.provider.config(), config.request_timeout)
        .context("Failed to set up taxa provider")?;

    let mut resolver = ModelResolver::new(provider).on_unresolved(|u| println!("{}", u));
    if let Some(max_concurrency) = args.concurrency {
        resolver = resolver.with_max_concurrency(max_concurrency);
    }

    let resolution = resolver
        .resolve(&spec)
        .await
        .with_context(|| format!("Failed to resolve model \"{}\"", spec.name))?;

    write_model(&args.output, &resolution.model)?;
    info!("Model \"{}\" written", resolution.model.name);
    println!("Wrote model to {}", args.output.display());
    Ok(())
}

pub fn check(model_path: &Path, json: bool) -> Result<()> {
    let model = load_model(model_path)?;
    let report = OverlapCheck::new().analyze(&model);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

pub fn print(model_path: &Path) -> Result<()> {
    let model = load_model(model_path)?;
    print!("{}", ModelListing(&model));
    Ok(())
}
