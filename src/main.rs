//! die CLI entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    // Structured logging goes to stderr so stdout stays the report; default filter is warn
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    die::cli::run()
}
