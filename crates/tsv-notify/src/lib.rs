//! # tsv-notify
//!
//! Plain-text notification rendering: a template key plus any serializable
//! model produces rendered text. Templates load from the configured directory
//! when one is set (a missing file there is an error); otherwise the built-in
//! template for the key is used.
//!
//! Placeholders are `{{dotted.path}}` expressions into the serialized model.
//! Scalars render directly; arrays and objects render as pretty JSON; paths
//! that resolve to nothing render empty.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use tsv_config::NotifyConfig;

pub mod error;
pub mod templates;

pub use error::NotifyError;
pub use templates::TemplateKey;

/// Render `model` through the template for `key`.
pub fn render<T: Serialize>(
    key: TemplateKey,
    model: &T,
    config: &NotifyConfig,
) -> Result<String, NotifyError> {
    let template = load_template(key, config)?;
    let model = serde_json::to_value(model)?;
    Ok(substitute(&template, &model))
}

fn load_template(key: TemplateKey, config: &NotifyConfig) -> Result<String, NotifyError> {
    if !config.has_template_dir() {
        return Ok(key.builtin().to_string());
    }

    let path = Path::new(&config.template_dir).join(key.template_name());
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(NotifyError::TemplateNotFound {
            name: key.template_name().to_string(),
            dir: config.template_dir.clone(),
        }),
        Err(e) => Err(NotifyError::Io(e)),
    }
}

/// Replace every `{{path}}` placeholder with the value at that path.
fn substitute(template: &str, model: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.push_str(&lookup(model, after[..end].trim()));
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated placeholder: emit literally.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup(model: &Value, path: &str) -> String {
    let mut current = model;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    match current {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(current).unwrap_or_default()
        }
        scalar => scalar.to_string(),
    }
}
