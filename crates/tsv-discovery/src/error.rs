//! Discovery error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from filesystem discovery.
///
/// Per-file read and parse failures are not errors: they are skipped with a
/// warning and counted in the discovery stats. Only problems with the scan
/// root itself or the configuration abort a run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The scan root does not exist or is not a directory.
    #[error("scan root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// The scan root could not be read.
    #[error("failed to read scan root {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An exclude glob from configuration failed to compile.
    #[error("invalid exclude glob '{glob}': {source}")]
    InvalidGlob {
        glob: String,
        #[source]
        source: globset::Error,
    },
}
