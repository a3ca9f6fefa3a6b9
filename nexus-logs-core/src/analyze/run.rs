use crate::analyze::classify::classify;
use crate::analyze::constants::DEFAULT_PROGRESS_INTERVAL;
use crate::analyze::error::AnalyzeError;
use crate::analyze::parse::extract_request;
use crate::analyze::stats_aggregation::TrafficStats;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Lines between two progress callbacks. Zero disables progress.
    pub progress_interval: u64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Line counters for one pass. `matched` always equals the number of requests
/// recorded in the accompanying [`TrafficStats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub lines: u64,
    pub matched: u64,
    pub skipped: u64,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub stats: TrafficStats,
    pub summary: ScanSummary,
}

/// Analyze the log file at `path`.
///
/// Fails before any counting happens if the file cannot be opened.
pub fn analyze_file(
    path: &Path,
    options: &AnalyzeOptions,
    on_progress: impl FnMut(u64),
) -> Result<Analysis, AnalyzeError> {
    tracing::info!(path = %path.display(), "analyzing access log");

    let file = File::open(path).map_err(|e| AnalyzeError::open(path, e))?;
    analyze_reader(BufReader::new(file), path, options, on_progress)
}

/// Analyze an already open log. `path` only names the input in errors.
pub fn analyze_reader<R: BufRead>(
    reader: R,
    path: &Path,
    options: &AnalyzeOptions,
    mut on_progress: impl FnMut(u64),
) -> Result<Analysis, AnalyzeError> {
    let mut stats = TrafficStats::new();
    let mut summary = ScanSummary::default();

    for raw in reader.split(b'\n') {
        let line_no = summary.lines + 1;
        let raw = raw.map_err(|e| AnalyzeError::read(path, line_no, e))?;
        summary.lines = line_no;

        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.strip_suffix('\r').unwrap_or(decoded.as_ref());

        match extract_request(line) {
            Some(request) => {
                let format = classify(request.repository, request.user_agent, request.path);
                tracing::trace!(
                    line = line_no,
                    method = request.method,
                    repository = request.repository,
                    format = %format,
                    "classified request"
                );
                stats.record(&request, format);
                summary.matched += 1;
            }
            None => {
                tracing::debug!(line = line_no, "no repository request on line, skipping");
                summary.skipped += 1;
            }
        }

        if options.progress_interval > 0 && line_no % options.progress_interval == 0 {
            on_progress(line_no);
        }
    }

    tracing::info!(
        lines = summary.lines,
        matched = summary.matched,
        skipped = summary.skipped,
        total_requests = stats.total_requests(),
        "analysis complete"
    );

    Ok(Analysis { stats, summary })
}
