use tsv_config::TsvConfig;
use tsv_core::responses::ValidateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::shared::{apply_limit, scoped_discovery};
use crate::output::output;

/// Handle `tsv validate`. Returns the report's pass/fail outcome.
pub fn handle(args: &ScanArgs, config: &TsvConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let discovery = scoped_discovery(args, config)?;
    let mut report = tsv_rules::validate(&args.path, discovery, &config.validation);
    apply_limit(&mut report.violations, flags.limit);
    let passed = report.passed;

    output(&ValidateResponse { report }, flags.format)?;
    Ok(passed)
}
