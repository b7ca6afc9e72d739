use std::path::PathBuf;

/// Errors that can occur while constructing a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unknown model '{0}'")]
    Unknown(String),
}

/// Errors that can occur during checkpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("no checkpoint found in {0}")]
    NoCheckpoint(PathBuf),

    #[error("failed to read metadata from {path}: {source}")]
    MetadataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse metadata from {path}: {source}")]
    MetadataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("checkpoint at {path} holds weights for model '{found}', not '{requested}'")]
    ArchitectureMismatch {
        path: PathBuf,
        requested: String,
        found: String,
    },

    #[error("failed to save weights: {0}")]
    WeightSave(String),

    #[error("failed to load weights from {path}: {message}")]
    WeightLoad { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while running a restore.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("model construction failed: {0}")]
    Model(#[from] ModelError),

    #[error("checkpoint restore failed: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::Unknown("my_seq_cnn".to_string());
        assert_eq!(err.to_string(), "unknown model 'my_seq_cnn'");
    }

    #[test]
    fn test_checkpoint_error_display() {
        let err = CheckpointError::NoCheckpoint(PathBuf::from("training"));
        assert_eq!(err.to_string(), "no checkpoint found in training");
    }

    #[test]
    fn test_mismatch_error_display() {
        let err = CheckpointError::ArchitectureMismatch {
            path: PathBuf::from("training/checkpoint_0000100"),
            requested: "my_seq_fdd".to_string(),
            found: "my_seq_fdd_wide".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "checkpoint at training/checkpoint_0000100 holds weights for model \
             'my_seq_fdd_wide', not 'my_seq_fdd'"
        );
    }

    #[test]
    fn test_restore_error_wraps_sources() {
        let err = RestoreError::from(ModelError::Unknown("bogus".to_string()));
        assert_eq!(
            err.to_string(),
            "model construction failed: unknown model 'bogus'"
        );

        let err = RestoreError::from(CheckpointError::NoCheckpoint(PathBuf::from("training")));
        assert_eq!(
            err.to_string(),
            "checkpoint restore failed: no checkpoint found in training"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("model must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: model must not be empty"
        );
    }
}
