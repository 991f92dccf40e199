//! Severity and check-id enums for validation results.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a validation violation.
///
/// `Error` gates the exit code; `Warning` is reported but never fails a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            other => Err(CoreError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckId
// ---------------------------------------------------------------------------

/// Identifier of a fixed validation check.
///
/// The check set is deliberately closed: checks are plain functions, not a
/// pluggable rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    /// A generated swagger file has no paired TypeSpec project.
    SwaggerMissingProject,
    /// A TypeSpec project has no paired generated swagger file.
    ProjectMissingOutput,
}

impl CheckId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SwaggerMissingProject => "swagger-missing-project",
            Self::ProjectMissingOutput => "project-missing-output",
        }
    }

    /// Default severity the check reports at.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::SwaggerMissingProject => Severity::Error,
            Self::ProjectMissingOutput => Severity::Warning,
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swagger-missing-project" => Ok(Self::SwaggerMissingProject),
            "project-missing-output" => Ok(Self::ProjectMissingOutput),
            other => Err(CoreError::UnknownCheck {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn severity_round_trips_through_str() {
        for severity in [Severity::Error, Severity::Warning] {
            let parsed: Severity = severity.as_str().parse().expect("known severity");
            assert_eq!(parsed, severity);
        }
    }

    #[test]
    fn severity_rejects_unknown_value() {
        let result: Result<Severity, _> = "fatal".parse();
        assert!(matches!(
            result,
            Err(CoreError::UnknownSeverity { value }) if value == "fatal"
        ));
    }

    #[test]
    fn check_id_serializes_kebab_case() {
        let json = serde_json::to_string(&CheckId::SwaggerMissingProject).expect("serialize");
        assert_eq!(json, "\"swagger-missing-project\"");
    }

    #[test]
    fn check_default_severities() {
        assert_eq!(
            CheckId::SwaggerMissingProject.default_severity(),
            Severity::Error
        );
        assert_eq!(
            CheckId::ProjectMissingOutput.default_severity(),
            Severity::Warning
        );
    }
}
