//! Discovery plumbing shared by the scan-based commands.

use std::path::Path;

use anyhow::Context;

use tsv_config::TsvConfig;
use tsv_discovery::Discovery;

use crate::cli::root_commands::ScanArgs;

/// Run discovery over the scan path, optionally restricted to paths changed
/// since the `--git-diff` base ref.
pub fn scoped_discovery(args: &ScanArgs, config: &TsvConfig) -> anyhow::Result<Discovery> {
    let root = Path::new(&args.path);
    let mut discovery = tsv_discovery::discover(root, &config.discovery)
        .with_context(|| format!("discovery failed under '{}'", args.path))?;

    if let Some(base) = &args.git_diff {
        let repo_root = tsv_git::repo_root(root)?;
        let changes = tsv_git::changed_paths(root, base)?;
        tracing::info!(
            base = %changes.base,
            head = %changes.head,
            changed = changes.paths.len(),
            "restricting validation to changed paths"
        );
        let rebased = tsv_git::rebase_changes(&changes, &repo_root, root)?;
        discovery.retain_changed(&rebased);
    }

    Ok(discovery)
}

/// Apply the global `--limit` flag to a result list.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: Option<u32>) {
    if let Some(limit) = limit {
        items.truncate(limit as usize);
    }
}
