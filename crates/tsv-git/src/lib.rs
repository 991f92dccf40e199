//! # tsv-git
//!
//! Changed-path computation for diff-scoped validation runs.
//!
//! `--git-diff <ref>` validation works on the set of paths that differ between
//! the tree of `<ref>` and the tree of `HEAD`. Worktree-only (uncommitted)
//! changes are not considered.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod error;

pub use error::GitError;

/// Paths changed between a base ref and HEAD, relative to the repo root.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeSet {
    /// The base ref as given (e.g., `main`, `origin/main`, a commit hash).
    pub base: String,
    /// Resolved HEAD commit id.
    pub head: String,
    /// Changed file paths, repo-root-relative with forward slashes.
    pub paths: BTreeSet<String>,
}

/// Discover the repository enclosing `start` and return its worktree root.
pub fn repo_root(start: &Path) -> Result<PathBuf, GitError> {
    let repo = gix::discover(start).map_err(|_| GitError::NotGitRepo(start.to_path_buf()))?;
    repo.work_dir()
        .map(Path::to_path_buf)
        .ok_or_else(|| GitError::Git("repository has no worktree".to_string()))
}

/// Compute the paths changed between `base_ref` and HEAD.
pub fn changed_paths(start: &Path, base_ref: &str) -> Result<ChangeSet, GitError> {
    let repo = gix::discover(start).map_err(|_| GitError::NotGitRepo(start.to_path_buf()))?;

    let base_id = repo
        .rev_parse_single(base_ref)
        .map_err(|e| GitError::RefNotFound {
            spec: base_ref.to_string(),
            reason: e.to_string(),
        })?;
    let base_commit = base_id
        .object()
        .map_err(|e| GitError::Git(format!("load base object: {e}")))?
        .peel_to_commit()
        .map_err(|e| GitError::RefNotFound {
            spec: base_ref.to_string(),
            reason: format!("does not point at a commit: {e}"),
        })?;
    let head_commit = repo
        .head_commit()
        .map_err(|e| GitError::Git(format!("resolve HEAD: {e}")))?;

    let base_tree = base_commit
        .tree()
        .map_err(|e| GitError::Git(format!("load base tree: {e}")))?;
    let head_tree = head_commit
        .tree()
        .map_err(|e| GitError::Git(format!("load head tree: {e}")))?;

    let changes = repo
        .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
        .map_err(|e| GitError::Git(format!("diff tree to tree: {e}")))?;

    let paths = changes
        .iter()
        .map(|change| change.location().to_string())
        .collect::<BTreeSet<_>>();

    tracing::debug!(base = %base_ref, changed = paths.len(), "computed change set");

    Ok(ChangeSet {
        base: base_ref.to_string(),
        head: head_commit.id().to_string(),
        paths,
    })
}

/// Re-anchor repo-root-relative changed paths onto a scan root.
///
/// `scan_root` must lie inside `repo_root`. Paths outside the scan root are
/// dropped; the rest are returned relative to the scan root. A scan root equal
/// to the repo root passes paths through unchanged.
pub fn rebase_changes(
    changes: &ChangeSet,
    repo_root: &Path,
    scan_root: &Path,
) -> Result<BTreeSet<String>, GitError> {
    let prefix = scan_prefix(repo_root, scan_root)?;
    if prefix.is_empty() {
        return Ok(changes.paths.clone());
    }

    let prefix_slash = format!("{prefix}/");
    Ok(changes
        .paths
        .iter()
        .filter_map(|p| p.strip_prefix(&prefix_slash).map(String::from))
        .collect())
}

/// Slash-joined path of the scan root relative to the repo root.
fn scan_prefix(repo_root: &Path, scan_root: &Path) -> Result<String, GitError> {
    let repo_root = repo_root
        .canonicalize()
        .map_err(|e| GitError::Git(format!("canonicalize repo root: {e}")))?;
    let scan_root = scan_root
        .canonicalize()
        .map_err(|e| GitError::Git(format!("canonicalize scan root: {e}")))?;

    let rel = scan_root.strip_prefix(&repo_root).map_err(|_| {
        GitError::Git(format!(
            "scan root {} is outside the repository at {}",
            scan_root.display(),
            repo_root.display()
        ))
    })?;

    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
