//! File walker factory for discovery passes.
//!
//! Uses the `ignore` crate for directory walking and `globset` to compile the
//! configured exclude patterns. Excludes are matched against root-relative
//! paths so the same pattern set behaves identically no matter where the scan
//! root lives on disk.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::DiscoveryError;

/// Walking mode for the discovery walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// No filters. Every file under the root is visited, hidden files included.
    Raw,
    /// Respect `.gitignore` files under the scan root.
    GitAware,
}

/// Build a file walker over `root` with the given mode.
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::Raw => {
            builder.standard_filters(false);
            builder.hidden(false);
        }
        WalkMode::GitAware => {
            builder.hidden(false);
        }
    }

    // .git contents are never interesting to discovery, even in raw mode.
    builder.filter_entry(|entry| {
        !(entry.file_name() == ".git" && entry.file_type().is_some_and(|ft| ft.is_dir()))
    });

    builder.build()
}

/// Compile the configured exclude globs into a single matcher.
pub fn build_exclude_set(globs: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = Glob::new(glob).map_err(|source| DiscoveryError::InvalidGlob {
            glob: glob.clone(),
            source,
        })?;
        builder.add(compiled);
    }
    builder
        .build()
        .map_err(|source| DiscoveryError::InvalidGlob {
            glob: globs.join(","),
            source,
        })
}
