//! Generation-marker probing for swagger JSON files.
//!
//! A swagger file counts as generated when the document parses as JSON and the
//! configured pointer (default `/info/x-typespec-generated`) resolves to a
//! truthy value: a non-empty array, `true`, or any object/string/number.

use std::path::Path;

use serde_json::Value;

/// Outcome of probing a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The generation marker is present and truthy.
    Generated {
        /// Emitter name from the first marker entry, when present.
        emitter: Option<String>,
    },
    /// Valid JSON without a truthy marker.
    NotGenerated,
    /// The file could not be read or parsed as JSON.
    Unparseable,
}

/// Probe `path` for the generation marker at `pointer`.
pub fn probe_file(path: &Path, pointer: &str) -> ProbeOutcome {
    let Ok(content) = std::fs::read_to_string(path) else {
        return ProbeOutcome::Unparseable;
    };
    let Ok(document) = serde_json::from_str::<Value>(&content) else {
        return ProbeOutcome::Unparseable;
    };
    probe_document(&document, pointer)
}

/// Probe an already-parsed document for the generation marker.
#[must_use]
pub fn probe_document(document: &Value, pointer: &str) -> ProbeOutcome {
    match document.pointer(pointer) {
        Some(marker) if is_truthy(marker) => ProbeOutcome::Generated {
            emitter: extract_emitter(marker),
        },
        _ => ProbeOutcome::NotGenerated,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Pull the emitter name out of the marker, which is conventionally an array
/// of `{ "emitter": "<name>" }` objects.
fn extract_emitter(marker: &Value) -> Option<String> {
    marker
        .as_array()
        .and_then(|items| items.first())
        .and_then(|entry| entry.get("emitter"))
        .and_then(Value::as_str)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    const POINTER: &str = "/info/x-typespec-generated";

    #[test]
    fn marker_array_with_emitter_is_generated() {
        let doc = json!({
            "info": {
                "title": "Widgets",
                "x-typespec-generated": [{ "emitter": "@azure-tools/typespec-autorest" }]
            }
        });
        assert_eq!(
            probe_document(&doc, POINTER),
            ProbeOutcome::Generated {
                emitter: Some("@azure-tools/typespec-autorest".to_string())
            }
        );
    }

    #[rstest]
    #[case::absent(json!({ "info": { "title": "Widgets" } }))]
    #[case::empty_array(json!({ "info": { "x-typespec-generated": [] } }))]
    #[case::false_marker(json!({ "info": { "x-typespec-generated": false } }))]
    #[case::null_marker(json!({ "info": { "x-typespec-generated": null } }))]
    #[case::no_info(json!({ "swagger": "2.0" }))]
    fn non_truthy_markers_are_not_generated(#[case] doc: serde_json::Value) {
        assert_eq!(probe_document(&doc, POINTER), ProbeOutcome::NotGenerated);
    }

    #[test]
    fn true_marker_without_emitter_is_generated() {
        let doc = json!({ "info": { "x-typespec-generated": true } });
        assert_eq!(
            probe_document(&doc, POINTER),
            ProbeOutcome::Generated { emitter: None }
        );
    }

    #[test]
    fn unreadable_file_is_unparseable() {
        let outcome = probe_file(Path::new("/nonexistent/widgets.json"), POINTER);
        assert_eq!(outcome, ProbeOutcome::Unparseable);
    }

    #[test]
    fn invalid_json_is_unparseable() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").expect("write");
        assert_eq!(probe_file(&path, POINTER), ProbeOutcome::Unparseable);
    }
}
