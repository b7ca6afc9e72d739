use burn::prelude::*;
use burn::record::DefaultRecorder;
use std::path::Path;

use crate::checkpoint::CheckpointRef;
use crate::error::{CheckpointError, ModelError};
use crate::model::registry;
use crate::model::seq_fdd::SeqFdd;

/// File stem of the weights record inside a checkpoint directory; the
/// recorder appends its own `.mpk` extension.
const WEIGHTS_STEM: &str = "model";

/// A named model instance on a device.
///
/// The handle owns the network for the lifetime of the process. Weight loads
/// are atomic with respect to the handle: on any failure the network is left
/// untouched.
#[derive(Debug)]
pub struct ModelHandle<B: Backend> {
    name: String,
    device: B::Device,
    network: SeqFdd<B>,
}

impl<B: Backend> ModelHandle<B> {
    /// Construct a freshly initialized model from its registered name.
    pub fn construct(name: &str, device: &B::Device) -> Result<Self, ModelError> {
        let network = registry::architecture(name)?.init(device);
        Ok(ModelHandle {
            name: name.to_string(),
            device: device.clone(),
            network,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network(&self) -> &SeqFdd<B> {
        &self.network
    }

    /// Save the network weights into `dir`.
    pub fn save_weights_to(&self, dir: &Path) -> Result<(), CheckpointError> {
        let recorder = DefaultRecorder::default();
        self.network
            .clone()
            .save_file(dir.join(WEIGHTS_STEM), &recorder)
            .map_err(|e| CheckpointError::WeightSave(e.to_string()))?;
        Ok(())
    }

    /// Replace the network's parameters with the checkpoint's stored values.
    ///
    /// The checkpoint must have been saved for this handle's model name;
    /// presets differ in parameter shapes, so a foreign record would leave the
    /// network inconsistent with its architecture.
    pub fn load_weights(&mut self, checkpoint: &CheckpointRef) -> Result<(), CheckpointError> {
        if checkpoint.metadata.model != self.name {
            return Err(CheckpointError::ArchitectureMismatch {
                path: checkpoint.path.clone(),
                requested: self.name.clone(),
                found: checkpoint.metadata.model.clone(),
            });
        }

        let recorder = DefaultRecorder::default();
        let path = checkpoint.path.join(WEIGHTS_STEM);
        let loaded = self
            .network
            .clone()
            .load_file(path.clone(), &recorder, &self.device)
            .map_err(|e| CheckpointError::WeightLoad {
                path,
                message: e.to_string(),
            })?;
        self.network = loaded;
        Ok(())
    }
}
