use serde::{Deserialize, Serialize};

/// Top-level checkpoint metadata written to metadata.json.
///
/// `step` orders checkpoints; `model` names the architecture the weights were
/// saved for, so a restore can reject an incompatible record before touching
/// the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointMetadata {
    pub step: usize,
    pub timestamp: u64,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serde() {
        let meta = CheckpointMetadata {
            step: 5000,
            timestamp: 1700000000,
            model: "my_seq_fdd".to_string(),
        };

        let json = serde_json::to_string_pretty(&meta).unwrap();
        let deserialized: CheckpointMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.step, 5000);
        assert_eq!(deserialized.timestamp, 1700000000);
        assert_eq!(deserialized.model, "my_seq_fdd");
    }
}
