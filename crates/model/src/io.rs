//! Reading model specifications and models from disk, and writing models.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::errors::{Error, Result};
use crate::models::{Model, ModelSpec};

/// Load a model specification from a JSON file.
pub fn load_model_spec(path: &Path) -> Result<ModelSpec> {
    read_json(path)
}

/// Load a resolved model from a JSON file.
pub fn load_model(path: &Path) -> Result<Model> {
    read_json(path)
}

/// Write a model as pretty-printed JSON, creating parent directories.
pub fn write_model(path: &Path, model: &Model) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(model)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} classes to {}", model.classes.len(), path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
