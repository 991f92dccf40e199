//! Assets maintenance configuration.
//!
//! Settings for the periodic cleanup of externalized test-recording assets:
//! which spec repositories to scan and how far back a recording may be
//! referenced before it is considered stale.

use serde::{Deserialize, Serialize};

/// Default staleness window in days.
const fn default_scan_window_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Repositories (owner/name) whose assets are maintained.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Tag prefix identifying asset tags owned by this tool.
    #[serde(default)]
    pub tag_prefix: String,

    /// Recordings unreferenced for longer than this many days are stale.
    #[serde(default = "default_scan_window_days")]
    pub scan_window_days: u32,

    /// Report stale assets without deleting anything.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            tag_prefix: String::new(),
            scan_window_days: default_scan_window_days(),
            dry_run: false,
        }
    }
}

impl AssetsConfig {
    /// Check if the assets section has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.repos.is_empty() && !self.tag_prefix.is_empty()
    }
}
