//! Thin binary entry point. `main` is the only place a failure becomes a
//! process exit.

use machtiani::fatal::{FailureReporter, ProcessExit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(failure) = machtiani::run(&args) {
        ProcessExit.report(&failure);
    }
}
