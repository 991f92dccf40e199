//! File discovery configuration.

use serde::{Deserialize, Serialize};

/// Default path globs excluded from swagger discovery: vendor quickstart
/// templates, schema definitions, example payloads, test scenarios, shared
/// common-types, and package manifests.
fn default_exclude() -> Vec<String> {
    [
        "**/quickstart-templates/**",
        "**/schema/**",
        "**/examples/**",
        "**/scenarios/**",
        "**/common-types/**",
        "**/package.json",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Default JSON pointer to the generation marker inside a swagger document.
fn default_marker_pointer() -> String {
    "/info/x-typespec-generated".to_string()
}

/// Default TypeSpec project configuration file name.
fn default_project_config_file() -> String {
    "tspconfig.yaml".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Path globs excluded from swagger discovery.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// JSON pointer to the generation marker field.
    #[serde(default = "default_marker_pointer")]
    pub marker_pointer: String,

    /// File name whose presence marks a directory as a TypeSpec project.
    #[serde(default = "default_project_config_file")]
    pub project_config_file: String,

    /// Whether the walker honors `.gitignore` files under the scan root.
    #[serde(default)]
    pub respect_gitignore: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            marker_pointer: default_marker_pointer(),
            project_config_file: default_project_config_file(),
            respect_gitignore: false,
        }
    }
}
