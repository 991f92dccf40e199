//! The fixed cross-validation checks, applied bidirectionally.
//!
//! Deliberately not a rule engine: each check is a plain function and the set
//! is closed over [`CheckId`].

use std::collections::BTreeSet;

use tsv_config::ValidationConfig;
use tsv_core::{CheckId, Pairing, TypeSpecProject, Violation};

/// Run every enabled check and collect violations, sorted by path.
#[must_use]
pub fn run_checks(
    pairings: &[Pairing],
    projects: &[TypeSpecProject],
    config: &ValidationConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if is_enabled(config, CheckId::SwaggerMissingProject) {
        violations.extend(swagger_missing_project(pairings));
    }
    if is_enabled(config, CheckId::ProjectMissingOutput) {
        violations.extend(project_missing_output(pairings, projects));
    }

    violations.sort_by(|a, b| a.path.cmp(&b.path).then(a.check.as_str().cmp(b.check.as_str())));
    violations
}

fn is_enabled(config: &ValidationConfig, check: CheckId) -> bool {
    !config
        .disabled_checks
        .iter()
        .any(|disabled| disabled == check.as_str())
}

/// Every generated swagger file must trace back to a TypeSpec project.
fn swagger_missing_project(pairings: &[Pairing]) -> Vec<Violation> {
    pairings
        .iter()
        .filter(|pairing| pairing.project.is_none())
        .map(|pairing| Violation {
            check: CheckId::SwaggerMissingProject,
            severity: CheckId::SwaggerMissingProject.default_severity(),
            path: pairing.swagger.clone(),
            message: "generated swagger file has no TypeSpec project nearby".to_string(),
        })
        .collect()
}

/// Every TypeSpec project should have at least one generated output.
fn project_missing_output(pairings: &[Pairing], projects: &[TypeSpecProject]) -> Vec<Violation> {
    let paired: BTreeSet<&str> = pairings
        .iter()
        .filter_map(|pairing| pairing.project.as_deref())
        .collect();

    projects
        .iter()
        .filter(|project| !paired.contains(project.path.as_str()))
        .map(|project| Violation {
            check: CheckId::ProjectMissingOutput,
            severity: CheckId::ProjectMissingOutput.default_severity(),
            path: project.path.clone(),
            message: "TypeSpec project has no generated swagger output".to_string(),
        })
        .collect()
}
