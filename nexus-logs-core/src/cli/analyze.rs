use crate::analyze::{
    AnalyzeOptions, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOP_CLIENTS, ReportFormat, analyze_file,
    render_json, render_report,
};
use anyhow::Result;
use clap::Args;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the repository access log
    pub logfile: PathBuf,

    /// How many clients to rank per package format
    #[arg(long, default_value_t = DEFAULT_TOP_CLIENTS)]
    pub top: usize,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub output: ReportFormat,

    /// Never print progress dots
    #[arg(long)]
    pub no_progress: bool,

    /// Lines between two progress dots
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let options = AnalyzeOptions {
        progress_interval: if show_progress {
            args.progress_interval
        } else {
            0
        },
    };

    if show_progress {
        eprintln!("Analyzing: {}", args.logfile.display());
        eprint!("Processing...");
        let _ = io::stderr().flush();
    }

    let analysis = analyze_file(&args.logfile, &options, |_| {
        eprint!(".");
        let _ = io::stderr().flush();
    })?;

    if show_progress {
        eprintln!(" Done!\n");
    }

    let output = match args.output {
        ReportFormat::Table => render_report(&analysis.stats, args.top, io::stdout().is_terminal()),
        ReportFormat::Json => render_json(&analysis, args.top)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;

    Ok(())
}
