use crate::error::{Result, ScoreError};
use crate::input::read_json;
use crate::types::progress::ExercisePriorityCandidate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<ExercisePriorityCandidate>),
    One(Box<ExercisePriorityCandidate>),
}

/// Loads candidates from a JSON file, or from every `*.json` file under a
/// directory in path order.
pub fn load(path: &Path) -> Result<Vec<ExercisePriorityCandidate>> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }

    let files = if path.is_dir() {
        catalog_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut candidates = Vec::new();
    for file in &files {
        match read_json::<CatalogFile>(file)? {
            CatalogFile::Many(many) => candidates.extend(many),
            CatalogFile::One(one) => candidates.push(*one),
        }
    }
    validate(&candidates)?;

    tracing::debug!(
        path = %path.display(),
        files = files.len(),
        candidates = candidates.len(),
        "loaded exercise catalog"
    );
    Ok(candidates)
}

/// Unreadable entries and symlink loops fail the whole load.
fn catalog_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            tracing::warn!(root = %root.display(), error = %e, "catalog entry unreadable");
            ScoreError::Io(std::io::Error::from(e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(files)
}

pub fn validate(candidates: &[ExercisePriorityCandidate]) -> Result<()> {
    let mut seen = HashSet::new();
    for candidate in candidates {
        if candidate.id.trim().is_empty() {
            return Err(ScoreError::Validation(
                "exercise id must not be empty".to_string(),
            ));
        }
        if candidate.name.trim().is_empty() {
            return Err(ScoreError::Validation(format!(
                "exercise {} has an empty name",
                candidate.id
            )));
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(ScoreError::Validation(format!(
                "duplicate exercise id: {}",
                candidate.id
            )));
        }
    }
    Ok(())
}
