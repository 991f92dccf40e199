//! Notification template configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Directory holding template files. Empty means built-in templates only.
    #[serde(default)]
    pub template_dir: String,
}

impl NotifyConfig {
    /// Check if a template directory override is set.
    #[must_use]
    pub fn has_template_dir(&self) -> bool {
        !self.template_dir.is_empty()
    }
}
