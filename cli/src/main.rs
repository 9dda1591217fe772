use clap::Parser;
use mazepath::Args;
use mazepath::app::{ERROR_EXIT_STATUS, run};
use mazepath::colors::ColorScheme;
use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let search_args = Args::parse();
    init_logging(&search_args.log_level);
    let colors = ColorScheme::new(!search_args.no_color);

    match run(search_args, &colors) {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
            ExitCode::from(ERROR_EXIT_STATUS)
        }
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
