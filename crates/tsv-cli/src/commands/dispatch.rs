use tsv_config::TsvConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler. Returns whether the run passed;
/// commands without a pass/fail outcome always pass.
pub fn dispatch(command: &Commands, config: &TsvConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    match command {
        Commands::Discover(args) => {
            commands::discover::handle(args, config, flags)?;
            Ok(true)
        }
        Commands::Validate(args) => commands::validate::handle(args, config, flags),
        Commands::Report(args) => commands::report::handle(args, config, flags),
    }
}
