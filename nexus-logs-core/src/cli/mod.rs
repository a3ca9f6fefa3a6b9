pub mod analyze;

use crate::cli::analyze::AnalyzeArgs;
use crate::logging::LogFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nexus-logs",
    version,
    about = "Break down repository manager access logs by repository, package format and client"
)]
pub struct Cli {
    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Diagnostics format on stderr (filtered by RUST_LOG)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}
