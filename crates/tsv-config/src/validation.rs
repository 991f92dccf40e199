//! Validation behavior configuration.

use serde::{Deserialize, Serialize};
use tsv_core::Severity;

const fn default_fail_on() -> Severity {
    Severity::Error
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Minimum severity that fails a run (`error` or `warning`).
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,

    /// Check ids to skip entirely (kebab-case).
    #[serde(default)]
    pub disabled_checks: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
            disabled_checks: Vec::new(),
        }
    }
}

impl ValidationConfig {
    /// Whether a violation at `severity` should fail the run.
    #[must_use]
    pub fn gates_failure(&self, severity: Severity) -> bool {
        match self.fail_on {
            Severity::Warning => true,
            Severity::Error => severity == Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_threshold_ignores_warnings() {
        let config = ValidationConfig::default();
        assert!(config.gates_failure(Severity::Error));
        assert!(!config.gates_failure(Severity::Warning));
    }

    #[test]
    fn warning_threshold_gates_everything() {
        let config = ValidationConfig {
            fail_on: Severity::Warning,
            ..ValidationConfig::default()
        };
        assert!(config.gates_failure(Severity::Error));
        assert!(config.gates_failure(Severity::Warning));
    }
}
