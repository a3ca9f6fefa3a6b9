//! Repository Access Log Analysis
//!
//! This module turns a package-repository access log into a traffic breakdown:
//! how many requests each repository served, which package ecosystem those
//! requests belong to, and which client addresses were the heaviest users of
//! each ecosystem.
//!
//! Every line of the log is handled on its own, in file order:
//! - The **extractor** pulls the quoted `METHOD /repository/<name>/... HTTP/x`
//!   request, the trailing quoted user-agent and the leading client address out
//!   of the line. Lines without a repository request are skipped silently.
//! - The **classifier** walks a fixed, ordered rule table (Maven, npm, Docker,
//!   NuGet, PyPI, P2/Eclipse) and picks the first format whose user-agent, path
//!   or repository-name substrings match. Nothing matching means `Other`.
//! - The **aggregator** bumps the repository, format and per-format client
//!   tallies together for each classified request.
//!
//! Once the whole file has been read, the tallies are handed to the reporter.
//!
//! The overall data processing architecture is:
//!
//! file
//! extract_request
//! RequestRecord
//! classify
//! TrafficStats
//! render_report
//!

mod classify;
mod constants;
mod error;
mod parse;
mod render;
mod rules;
mod run;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOP_CLIENTS};
pub use error::AnalyzeError;
pub use parse::extract_request;
pub use render::{ReportFormat, render_json, render_report};
pub use rules::{FORMAT_RULES, FormatRule};
pub use run::{Analysis, AnalyzeOptions, ScanSummary, analyze_file, analyze_reader};
pub use stats_aggregation::{ClientCount, TrafficStats};
pub use types::{PackageFormat, RequestRecord};
