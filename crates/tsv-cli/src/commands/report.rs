use anyhow::Context;

use tsv_config::TsvConfig;
use tsv_core::responses::ReportResponse;
use tsv_notify::TemplateKey;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::scoped_discovery;
use crate::output::output;

/// Handle `tsv report`. Returns the report's pass/fail outcome.
pub fn handle(args: &ReportArgs, config: &TsvConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let key: TemplateKey = args
        .template
        .parse()
        .with_context(|| format!("invalid --template '{}'", args.template))?;

    let discovery = scoped_discovery(&args.scan, config)?;
    let report = tsv_rules::validate(&args.scan.path, discovery, &config.validation);
    let passed = report.passed;

    let rendered = tsv_notify::render(key, &report, &config.notify)
        .with_context(|| format!("rendering template '{key}'"))?;

    output(
        &ReportResponse {
            template: key.to_string(),
            rendered,
            passed,
        },
        flags.format,
    )?;
    Ok(passed)
}
