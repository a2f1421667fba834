//! Errors raised at the data-source and configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain quest data or configuration.
///
/// Lifecycle operations never produce these; "not found" and "requirements
/// unmet" are ordinary `bool`/`Option` results on the registry.
#[derive(Debug, Error)]
pub enum QuestDataError {
    /// The data source could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The quest data is not valid JSON or does not match the schema.
    #[error("malformed quest data: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML.
    #[error("invalid quest system config: {0}")]
    Config(#[from] toml::de::Error),
}

impl QuestDataError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = QuestDataError::io(
            "Content/Data/QuestData.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("Content/Data/QuestData.json"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: QuestDataError = json_err.into();
        assert!(matches!(err, QuestDataError::Json(_)));
    }
}
