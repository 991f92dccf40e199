//! Entity structs for discovered files, projects, pairings, and reports.
//!
//! Paths are stored relative to the scan root with forward slashes so output
//! is stable across platforms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CheckId, Severity};

/// A JSON file known to have been generated from a TypeSpec source.
///
/// Detected via the `info.x-typespec-generated` marker. Immutable once
/// discovered; unique by path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwaggerFile {
    /// Path relative to the scan root.
    pub path: String,
    /// Emitter name from the generation marker, when the marker carries one.
    pub emitter: Option<String>,
}

/// A directory containing a TypeSpec project configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSpecProject {
    /// Directory path relative to the scan root.
    pub path: String,
    /// The configuration file that marked this directory as a project.
    pub config_file: String,
}

/// Aggregate statistics for one discovery pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Total filesystem entries walked.
    pub files_walked: u64,
    /// JSON files opened and probed for the generation marker.
    pub json_probed: u64,
    /// JSON files skipped because they could not be read or parsed.
    pub parse_errors: u64,
    /// Wall-clock time in milliseconds.
    pub elapsed_ms: u64,
}

/// Association of a swagger file with its nearest TypeSpec project, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pairing {
    /// Swagger file path relative to the scan root.
    pub swagger: String,
    /// Paired project directory, `None` when no project qualifies.
    pub project: Option<String>,
}

/// A single check failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub check: CheckId,
    pub severity: Severity,
    /// The swagger file or project directory the violation is about.
    pub path: String,
    pub message: String,
}

/// Full result of a validation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Scan root as given on the command line.
    pub root: String,
    pub swagger_files: Vec<SwaggerFile>,
    pub projects: Vec<TypeSpecProject>,
    pub pairings: Vec<Pairing>,
    pub violations: Vec<Violation>,
    pub stats: DiscoveryStats,
    /// False when any Error-severity violation is present.
    pub passed: bool,
}

impl ValidationReport {
    /// Count violations at the given severity.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

/// An API review document, used as a notification template model.
///
/// Soft-deleted via `is_deleted` rather than removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewModel {
    pub id: String,
    pub package_name: String,
    pub language: String,
    pub author: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A pull-request record tied to a review, used as a notification template model.
///
/// Created on first push, updated on subsequent activity, soft-deleted via flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestModel {
    pub id: String,
    pub review_id: String,
    pub pull_request_number: u64,
    pub repo_name: String,
    pub package_name: String,
    pub language: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
