use crate::analyze::run::{Analysis, ScanSummary};
use crate::analyze::stats_aggregation::TrafficStats;
use crate::analyze::types::PackageFormat;
use owo_colors::OwoColorize;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

/// Render the three report tables: repositories, formats, and the top `top`
/// clients per format.
pub fn render_report(stats: &TrafficStats, top: usize, color: bool) -> String {
    let mut out = String::new();
    let total = stats.total_requests();
    let light = "-".repeat(RULE_WIDTH);

    push_title(&mut out, "REPOSITORY ACCESS BREAKDOWN", color);
    out.push_str(&format!("{:>10} | Repository\n{light}\n", "Requests"));
    for (repo, count) in stats.repositories_by_count() {
        out.push_str(&format!("{:>10} | {}\n", group_thousands(count), repo));
    }
    out.push_str(&format!(
        "{light}\n{:>10} | TOTAL\n\n",
        group_thousands(total)
    ));

    push_title(&mut out, "PACKAGE FORMAT SUMMARY", color);
    out.push_str(&format!(
        "{:>10} | {:>10} | Format\n{light}\n",
        "Requests", "Percentage"
    ));
    let formats = stats.formats_by_count();
    for (format, count) in &formats {
        out.push_str(&format!(
            "{:>10} | {:>9.2}% | {}\n",
            group_thousands(*count),
            percentage(*count, total),
            format
        ));
    }
    out.push_str(&format!(
        "{light}\n{:>10} | {:>9.2}% | TOTAL\n\n",
        group_thousands(total),
        100.0
    ));

    push_title(&mut out, &format!("TOP {top} CLIENTS PER PACKAGE FORMAT"), color);
    for (format, _) in &formats {
        let heading = format!("{format}:");
        if color {
            out.push_str(&format!("\n{}\n", heading.bold()));
        } else {
            out.push_str(&format!("\n{heading}\n"));
        }
        out.push_str(&format!(
            "  Rank | {:>10} | IP Address\n  {} | {} | {}\n",
            "Requests",
            "-".repeat(4),
            "-".repeat(10),
            "-".repeat(18)
        ));

        for (rank, client) in stats.top_clients(*format, top).iter().enumerate() {
            out.push_str(&format!(
                "  {:>4} | {:>10} | {}\n",
                rank + 1,
                group_thousands(client.count),
                client.address
            ));
        }
    }

    out
}

fn push_title(out: &mut String, title: &str, color: bool) {
    let heavy = "=".repeat(RULE_WIDTH);
    if color {
        out.push_str(&format!("{heavy}\n{}\n{heavy}\n", title.bold()));
    } else {
        out.push_str(&format!("{heavy}\n{title}\n{heavy}\n"));
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    total: u64,
    scan: ScanSummary,
    repositories: Vec<RepositoryJson<'a>>,
    formats: Vec<FormatJson>,
    top_clients: Vec<FormatClientsJson>,
}

#[derive(Serialize)]
struct RepositoryJson<'a> {
    name: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct FormatJson {
    format: PackageFormat,
    count: u64,
    percentage: f64,
}

/// Per-format client ranking, in the same order as `formats`.
#[derive(Serialize)]
struct FormatClientsJson {
    format: PackageFormat,
    clients: Vec<ClientJson>,
}

#[derive(Serialize)]
struct ClientJson {
    rank: usize,
    address: String,
    count: u64,
}

/// Render the report as a single pretty-printed JSON document.
pub fn render_json(analysis: &Analysis, top: usize) -> serde_json::Result<String> {
    let stats = &analysis.stats;
    let total = stats.total_requests();
    let formats = stats.formats_by_count();

    let report = ReportJson {
        total,
        scan: analysis.summary,
        repositories: stats
            .repositories_by_count()
            .into_iter()
            .map(|(name, count)| RepositoryJson { name, count })
            .collect(),
        formats: formats
            .iter()
            .map(|(format, count)| FormatJson {
                format: *format,
                count: *count,
                percentage: percentage(*count, total),
            })
            .collect(),
        top_clients: formats
            .iter()
            .map(|(format, _)| FormatClientsJson {
                format: *format,
                clients: stats
                    .top_clients(*format, top)
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| ClientJson {
                        rank: i + 1,
                        address: c.address,
                        count: c.count,
                    })
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report)
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// `1234567` -> `"1,234,567"`
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
