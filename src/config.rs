use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Restore-tool configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RestoreConfig {
    /// Name of the model to construct.
    pub model: String,
    /// Directory the training process writes checkpoints into.
    pub checkpoint_dir: PathBuf,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        RestoreConfig {
            model: "my_seq_fdd".to_string(),
            checkpoint_dir: PathBuf::from("training"),
        }
    }
}

impl RestoreConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: RestoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        if self.checkpoint_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "checkpoint_dir must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&RestoreConfig::default()).expect("default config serializes")
    }
}
