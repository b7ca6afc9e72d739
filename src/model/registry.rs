use crate::error::ModelError;
use crate::model::seq_fdd::SeqFddConfig;

/// Model names this build knows how to construct.
pub const KNOWN_MODELS: &[&str] = &["my_seq_fdd", "my_seq_fdd_wide"];

/// Look up the architecture preset for a model name.
///
/// The presets share input/output widths but differ in hidden width, so a
/// checkpoint from one cannot be loaded into the other.
pub fn architecture(name: &str) -> Result<SeqFddConfig, ModelError> {
    match name {
        "my_seq_fdd" => Ok(SeqFddConfig::new(40, 256, 10)),
        "my_seq_fdd_wide" => Ok(SeqFddConfig::new(40, 512, 10)),
        _ => Err(ModelError::Unknown(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_resolve() {
        for name in KNOWN_MODELS {
            architecture(name).expect("registered model should resolve");
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = architecture("my_seq_cnn").unwrap_err();
        assert!(matches!(err, ModelError::Unknown(name) if name == "my_seq_cnn"));
    }

    #[test]
    fn test_presets_differ_in_hidden_width() {
        let narrow = architecture("my_seq_fdd").unwrap();
        let wide = architecture("my_seq_fdd_wide").unwrap();
        assert_eq!(narrow.input_dim, wide.input_dim);
        assert_eq!(narrow.output_dim, wide.output_dim);
        assert_ne!(narrow.hidden_dim, wide.hidden_dim);
    }
}
