//! # tsv-discovery
//!
//! One-shot filesystem discovery of generated swagger files and TypeSpec
//! projects beneath a scan root.
//!
//! A discovery pass walks the root once, probes every candidate `.json` file
//! for the generation marker, and records every directory holding the project
//! configuration file. Unreadable or unparseable JSON files are skipped with a
//! warning and counted in [`DiscoveryStats`]; only root-level failures abort.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use tsv_config::DiscoveryConfig;
use tsv_core::{DiscoveryStats, SwaggerFile, TypeSpecProject};

pub mod error;
pub mod probe;
pub mod walk;

pub use error::DiscoveryError;
pub use probe::{ProbeOutcome, probe_document, probe_file};
pub use walk::{WalkMode, build_exclude_set, build_walker};

/// Result of one discovery pass. Both sets are sorted by path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discovery {
    pub swagger_files: Vec<SwaggerFile>,
    pub projects: Vec<TypeSpecProject>,
    pub stats: DiscoveryStats,
}

impl Discovery {
    /// Restrict the discovery to paths touched by a change set.
    ///
    /// `changed` holds root-relative file paths. A swagger file survives when
    /// its own path changed; a project survives when any changed path lies
    /// inside its directory. A project at the scan root (`"."`) contains every
    /// path, so it survives whenever anything changed at all.
    pub fn retain_changed(&mut self, changed: &BTreeSet<String>) {
        self.swagger_files.retain(|f| changed.contains(&f.path));
        self.projects.retain(|p| {
            if p.path == "." {
                return !changed.is_empty();
            }
            let prefix = format!("{}/", p.path);
            changed.iter().any(|c| c.starts_with(&prefix))
        });
    }
}

/// Discover generated swagger files and TypeSpec projects beneath `root`.
///
/// # Errors
///
/// Fails when the root is missing or unreadable, or when a configured exclude
/// glob does not compile.
pub fn discover(root: &Path, config: &DiscoveryConfig) -> Result<Discovery, DiscoveryError> {
    let started = Instant::now();

    if !root.is_dir() {
        return Err(DiscoveryError::RootNotADirectory(root.to_path_buf()));
    }
    // Surface permission problems on the root itself instead of silently
    // walking an empty tree.
    std::fs::read_dir(root).map_err(|source| DiscoveryError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let excludes = build_exclude_set(&config.exclude)?;
    let mode = if config.respect_gitignore {
        WalkMode::GitAware
    } else {
        WalkMode::Raw
    };

    let mut swagger_files = Vec::new();
    let mut projects = Vec::new();
    let mut stats = DiscoveryStats::default();

    for entry in build_walker(root, mode) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        stats.files_walked += 1;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(rel) = relative_path(root, entry.path()) else {
            continue;
        };

        let file_name = entry.file_name().to_string_lossy();
        if file_name == config.project_config_file {
            let dir = parent_path(&rel);
            projects.push(TypeSpecProject {
                path: dir,
                config_file: config.project_config_file.clone(),
            });
            continue;
        }

        if !file_name.ends_with(".json") || excludes.is_match(&rel) {
            continue;
        }

        stats.json_probed += 1;
        match probe_file(entry.path(), &config.marker_pointer) {
            ProbeOutcome::Generated { emitter } => {
                swagger_files.push(SwaggerFile { path: rel, emitter });
            }
            ProbeOutcome::NotGenerated => {}
            ProbeOutcome::Unparseable => {
                stats.parse_errors += 1;
                tracing::warn!(path = %rel, "skipping unparseable JSON file");
            }
        }
    }

    swagger_files.sort_by(|a, b| a.path.cmp(&b.path));
    projects.sort_by(|a, b| a.path.cmp(&b.path));
    stats.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(Discovery {
        swagger_files,
        projects,
        stats,
    })
}

/// Root-relative path with forward slashes, for stable cross-platform output.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    (!joined.is_empty()).then_some(joined)
}

/// Parent of a relative slash path; the scan root itself is `"."`.
fn parent_path(rel: &str) -> String {
    rel.rsplit_once('/')
        .map_or_else(|| ".".to_string(), |(dir, _)| dir.to_string())
}
