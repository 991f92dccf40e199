use clap::{Args, Subcommand};

/// Top-level subcommands for the `tsv` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List generated swagger files and TypeSpec projects under a root.
    Discover(ScanArgs),
    /// Discover, pair, and cross-check; exit nonzero on Error violations.
    Validate(ScanArgs),
    /// Validate and render the report through a notification template.
    Report(ReportArgs),
}

/// Arguments shared by discovery-based commands.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan.
    pub path: String,

    /// Only consider paths changed since this git ref (e.g., `origin/main`).
    #[arg(long = "git-diff", value_name = "REF")]
    pub git_diff: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Template key: validation-summary, violation-digest, ...
    #[arg(short, long)]
    pub template: String,
}
