use clap::Parser;
use nexus_logs_core::cli::Cli;
use nexus_logs_core::cli::analyze::run;
use nexus_logs_core::logging::{default_log_format, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(cli.analyze) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
