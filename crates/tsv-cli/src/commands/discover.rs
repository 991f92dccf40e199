use tsv_config::TsvConfig;
use tsv_core::responses::DiscoverResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::shared::{apply_limit, scoped_discovery};
use crate::output::output;

/// Handle `tsv discover`.
pub fn handle(args: &ScanArgs, config: &TsvConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut discovery = scoped_discovery(args, config)?;
    apply_limit(&mut discovery.swagger_files, flags.limit);
    apply_limit(&mut discovery.projects, flags.limit);

    output(
        &DiscoverResponse {
            root: args.path.clone(),
            swagger_files: discovery.swagger_files,
            projects: discovery.projects,
            stats: discovery.stats,
        },
        flags.format,
    )
}
