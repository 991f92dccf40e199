//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository: {0}")]
    NotGitRepo(PathBuf),
    #[error("cannot resolve ref '{spec}': {reason}")]
    RefNotFound { spec: String, reason: String },
    #[error("git error: {0}")]
    Git(String),
}
