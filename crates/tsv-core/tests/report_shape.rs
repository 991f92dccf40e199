//! Output-shape tests for the validation report, which CI consumers parse.

use pretty_assertions::assert_eq;
use tsv_core::entities::{
    DiscoveryStats, Pairing, SwaggerFile, TypeSpecProject, ValidationReport, Violation,
};
use tsv_core::enums::{CheckId, Severity};

fn sample_report() -> ValidationReport {
    ValidationReport {
        root: "specification".into(),
        swagger_files: vec![SwaggerFile {
            path: "specification/widgets/data-plane/widgets.json".into(),
            emitter: Some("@azure-tools/typespec-autorest".into()),
        }],
        projects: vec![TypeSpecProject {
            path: "specification/widgets/Widgets".into(),
            config_file: "tspconfig.yaml".into(),
        }],
        pairings: vec![Pairing {
            swagger: "specification/widgets/data-plane/widgets.json".into(),
            project: None,
        }],
        violations: vec![
            Violation {
                check: CheckId::SwaggerMissingProject,
                severity: Severity::Error,
                path: "specification/widgets/data-plane/widgets.json".into(),
                message: "no TypeSpec project found".into(),
            },
            Violation {
                check: CheckId::ProjectMissingOutput,
                severity: Severity::Warning,
                path: "specification/widgets/Widgets".into(),
                message: "no generated output found".into(),
            },
        ],
        stats: DiscoveryStats {
            files_walked: 10,
            json_probed: 3,
            parse_errors: 1,
            elapsed_ms: 7,
        },
        passed: false,
    }
}

#[test]
fn report_serializes_checks_as_kebab_case() {
    let json = serde_json::to_value(sample_report()).expect("serialize");
    assert_eq!(
        json["violations"][0]["check"],
        serde_json::json!("swagger-missing-project")
    );
    assert_eq!(json["violations"][0]["severity"], serde_json::json!("error"));
    assert_eq!(json["passed"], serde_json::json!(false));
}

#[test]
fn report_deserializes_from_emitted_json() {
    let report = sample_report();
    let json = serde_json::to_string(&report).expect("serialize");
    let recovered: ValidationReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(recovered, report);
}

#[test]
fn count_at_splits_by_severity() {
    let report = sample_report();
    assert_eq!(report.count_at(Severity::Error), 1);
    assert_eq!(report.count_at(Severity::Warning), 1);
}
