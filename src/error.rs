use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML drill file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON drill file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported drill file format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Drill file {} contains no drills", path.display())]
    NoDrills { path: PathBuf },

    #[error("Invalid input for '{op}': {reason}")]
    InvalidInput { op: &'static str, reason: String },
}

impl DrillError {
    pub fn invalid_input(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            op,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = DrillError::invalid_input("find_middle", "list must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'find_middle': list must not be empty"
        );
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = DrillError::UnsupportedFormat {
            extension: "yaml".to_string(),
        };
        assert!(err.to_string().contains("'yaml'"));
    }
}
