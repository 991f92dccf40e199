//! Notification error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// A template key string did not match any known key.
    #[error("unknown template key '{0}'")]
    UnknownKey(String),

    /// The resolved template file does not exist in the configured directory.
    #[error("template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: String },

    /// The template file exists but could not be read.
    #[error("failed to read template: {0}")]
    Io(#[from] std::io::Error),

    /// The model could not be serialized for placeholder lookup.
    #[error("model serialization failed: {0}")]
    Model(#[from] serde_json::Error),
}
