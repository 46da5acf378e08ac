//! Boundary loaders: read caller-supplied JSON and reject anything the engine
//! is not prepared to score.

pub mod exercises;
pub mod experience;
pub mod habits;

use crate::error::{Result, ScoreError};
use serde::de::DeserializeOwned;
use std::path::Path;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ScoreError::InputParse(format!("{}: {}", path.display(), e)))
}
