//! Template keys and their file-name resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NotifyError;

/// The closed set of notification templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    /// One-paragraph summary of a validation run.
    ValidationSummary,
    /// Per-violation listing of a failed run.
    ViolationDigest,
    /// An API review document changed.
    ReviewUpdated,
    /// A pull request created or updated a review.
    PullRequestOpened,
}

impl TemplateKey {
    /// File name the key resolves to inside the template directory.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::ValidationSummary => "validation-summary.txt",
            Self::ViolationDigest => "violation-digest.txt",
            Self::ReviewUpdated => "review-updated.txt",
            Self::PullRequestOpened => "pull-request-opened.txt",
        }
    }

    /// Built-in template text used when no template directory is configured.
    #[must_use]
    pub const fn builtin(self) -> &'static str {
        match self {
            Self::ValidationSummary => BUILTIN_VALIDATION_SUMMARY,
            Self::ViolationDigest => BUILTIN_VIOLATION_DIGEST,
            Self::ReviewUpdated => BUILTIN_REVIEW_UPDATED,
            Self::PullRequestOpened => BUILTIN_PULL_REQUEST_OPENED,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationSummary => "validation-summary",
            Self::ViolationDigest => "violation-digest",
            Self::ReviewUpdated => "review-updated",
            Self::PullRequestOpened => "pull-request-opened",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validation-summary" => Ok(Self::ValidationSummary),
            "violation-digest" => Ok(Self::ViolationDigest),
            "review-updated" => Ok(Self::ReviewUpdated),
            "pull-request-opened" => Ok(Self::PullRequestOpened),
            other => Err(NotifyError::UnknownKey(other.to_string())),
        }
    }
}

const BUILTIN_VALIDATION_SUMMARY: &str = "\
TypeSpec validation of {{root}}
Status: {{passed}}
Files walked: {{stats.files_walked}}, JSON probed: {{stats.json_probed}}, \
parse errors: {{stats.parse_errors}} ({{stats.elapsed_ms}} ms)
";

const BUILTIN_VIOLATION_DIGEST: &str = "\
TypeSpec validation of {{root}} finished with passed={{passed}}.
Violations:
{{violations}}
";

const BUILTIN_REVIEW_UPDATED: &str = "\
API review for {{package_name}} ({{language}}) by {{author}} was updated at {{updated_at}}.
";

const BUILTIN_PULL_REQUEST_OPENED: &str = "\
Pull request #{{pull_request_number}} in {{repo_name}} updated review {{review_id}} \
for {{package_name}} ({{language}}).
";
