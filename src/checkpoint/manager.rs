use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use burn::prelude::*;

use crate::checkpoint::metadata::CheckpointMetadata;
use crate::error::CheckpointError;
use crate::model::ModelHandle;

/// A resolved checkpoint: its directory plus parsed metadata.
#[derive(Debug, Clone)]
pub struct CheckpointRef {
    pub path: PathBuf,
    pub metadata: CheckpointMetadata,
}

/// Manages saving, listing, and resolving checkpoints in one directory.
///
/// The directory is owned by the training process; the restore path only ever
/// reads it.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CheckpointManager { dir: dir.into() }
    }

    /// Save a checkpoint of the model at the given training step.
    ///
    /// Weights and metadata are staged in a `.tmp` directory and renamed into
    /// place, so a scan never observes a half-written checkpoint.
    pub fn save_checkpoint<B: Backend>(
        &self,
        model: &ModelHandle<B>,
        step: usize,
    ) -> Result<PathBuf, CheckpointError> {
        let dir_name = format!("checkpoint_{:07}", step);
        let tmp_dir = self.dir.join(format!("{}.tmp", dir_name));
        let final_dir = self.dir.join(&dir_name);

        fs::create_dir_all(&tmp_dir)?;

        model.save_weights_to(&tmp_dir)?;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let metadata = CheckpointMetadata {
            step,
            timestamp,
            model: model.name().to_string(),
        };
        let meta_json = serde_json::to_string_pretty(&metadata)?;
        fs::write(tmp_dir.join("metadata.json"), meta_json)?;

        // Atomic rename
        if final_dir.exists() {
            fs::remove_dir_all(&final_dir)?;
        }
        fs::rename(&tmp_dir, &final_dir)?;

        Ok(final_dir)
    }

    /// List all checkpoints sorted by step (ascending), ties broken by
    /// timestamp. `.tmp` staging directories and foreign entries are skipped.
    pub fn list_checkpoints(&self) -> Result<Vec<CheckpointRef>, CheckpointError> {
        let mut results = Vec::new();
        if !self.dir.exists() {
            return Ok(results);
        }
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if !name_str.starts_with("checkpoint_") || name_str.ends_with(".tmp") {
                continue;
            }
            let meta_path = path.join("metadata.json");
            if !meta_path.exists() {
                continue;
            }
            let metadata = read_metadata(&meta_path)?;
            results.push(CheckpointRef { path, metadata });
        }
        results.sort_by_key(|c| (c.metadata.step, c.metadata.timestamp));
        Ok(results)
    }

    /// Resolve the most recent checkpoint by recorded step, independent of
    /// filesystem listing order. An empty or absent directory resolves to
    /// `None` rather than an error.
    pub fn resolve_latest(&self) -> Result<Option<CheckpointRef>, CheckpointError> {
        let mut checkpoints = self.list_checkpoints()?;
        Ok(checkpoints.pop())
    }
}

fn read_metadata(meta_path: &Path) -> Result<CheckpointMetadata, CheckpointError> {
    let meta_json = fs::read_to_string(meta_path).map_err(|e| CheckpointError::MetadataRead {
        path: meta_path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&meta_json).map_err(|e| CheckpointError::MetadataParse {
        path: meta_path.to_path_buf(),
        source: e,
    })
}
