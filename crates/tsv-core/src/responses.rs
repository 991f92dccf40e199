//! CLI response types returned as JSON by `tsv` commands.
//!
//! These structs define the shape of output for `tsv discover`, `tsv validate`,
//! and `tsv report`.

use serde::{Deserialize, Serialize};

use crate::entities::{DiscoveryStats, SwaggerFile, TypeSpecProject, ValidationReport};

/// Response from `tsv discover`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscoverResponse {
    pub root: String,
    pub swagger_files: Vec<SwaggerFile>,
    pub projects: Vec<TypeSpecProject>,
    pub stats: DiscoveryStats,
}

/// Response from `tsv validate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateResponse {
    pub report: ValidationReport,
}

/// Response from `tsv report`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportResponse {
    /// Template key the report was rendered through.
    pub template: String,
    pub rendered: String,
    pub passed: bool,
}
