//! # tsv-rules
//!
//! Pairing of discovered swagger files with TypeSpec projects and the fixed
//! cross-validation checks over the result.

use tsv_config::ValidationConfig;
use tsv_core::ValidationReport;
use tsv_discovery::Discovery;

pub mod checks;
pub mod pairing;

pub use checks::run_checks;
pub use pairing::pair;

/// Pair, check, and assemble the full validation report.
///
/// `root` is the scan root as given on the command line, carried through for
/// display only.
#[must_use]
pub fn validate(root: &str, discovery: Discovery, config: &ValidationConfig) -> ValidationReport {
    let pairings = pair(&discovery.swagger_files, &discovery.projects);
    let violations = run_checks(&pairings, &discovery.projects, config);
    let passed = !violations.iter().any(|v| config.gates_failure(v.severity));

    tracing::debug!(
        swagger_files = discovery.swagger_files.len(),
        projects = discovery.projects.len(),
        violations = violations.len(),
        passed,
        "validation complete"
    );

    ValidationReport {
        root: root.to_string(),
        swagger_files: discovery.swagger_files,
        projects: discovery.projects,
        pairings,
        violations,
        stats: discovery.stats,
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tsv_core::{DiscoveryStats, Severity, SwaggerFile, TypeSpecProject};

    fn discovery() -> Discovery {
        Discovery {
            swagger_files: vec![SwaggerFile {
                path: "spec/widgets/data-plane/widgets.json".into(),
                emitter: Some("@azure-tools/typespec-autorest".into()),
            }],
            projects: vec![TypeSpecProject {
                path: "spec/widgets/Widgets".into(),
                config_file: "tspconfig.yaml".into(),
            }],
            stats: DiscoveryStats::default(),
        }
    }

    #[test]
    fn paired_tree_passes() {
        let report = validate("spec", discovery(), &ValidationConfig::default());
        assert!(report.passed);
        assert_eq!(report.violations, Vec::new());
        assert_eq!(
            report.pairings[0].project.as_deref(),
            Some("spec/widgets/Widgets")
        );
    }

    #[test]
    fn warnings_fail_only_under_warning_threshold() {
        let mut d = discovery();
        d.projects.push(TypeSpecProject {
            path: "spec/gadgets/Gadgets".into(),
            config_file: "tspconfig.yaml".into(),
        });

        let report = validate("spec", d.clone(), &ValidationConfig::default());
        assert!(report.passed);
        assert_eq!(report.count_at(Severity::Warning), 1);

        let strict = ValidationConfig {
            fail_on: Severity::Warning,
            ..ValidationConfig::default()
        };
        let report = validate("spec", d, &strict);
        assert!(!report.passed);
    }
}
