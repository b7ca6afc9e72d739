use burn::prelude::*;

use crate::checkpoint::CheckpointManager;
use crate::config::RestoreConfig;
use crate::error::{CheckpointError, RestoreError};
use crate::model::ModelHandle;

/// Restores the configured model from the latest checkpoint.
///
/// Runs three steps in order: construct the named model, resolve the latest
/// checkpoint in the configured directory, load its weights into the model.
/// The first failure aborts the run; there is no retry.
pub struct RestoreRunner {
    config: RestoreConfig,
}

impl RestoreRunner {
    pub fn new(config: RestoreConfig) -> Self {
        RestoreRunner { config }
    }

    /// Restore and return the model, ready for evaluation.
    pub fn run<B: Backend>(&self, device: &B::Device) -> Result<ModelHandle<B>, RestoreError> {
        // An unknown model name must fail before any checkpoint I/O happens.
        let mut model = ModelHandle::construct(&self.config.model, device)?;

        let manager = CheckpointManager::new(self.config.checkpoint_dir.clone());
        let latest = manager
            .resolve_latest()?
            .ok_or_else(|| CheckpointError::NoCheckpoint(self.config.checkpoint_dir.clone()))?;

        model.load_weights(&latest)?;
        Ok(model)
    }
}
