use std::io;

use unshorten_core::config::Settings;
use unshorten_core::{interrupt, logging, ResolveError};

mod cli;

fn main() {
    let settings = Settings::from_env();
    logging::init_logging(&settings);
    interrupt::install();

    if let Err(err) = cli::run_from_args(&settings) {
        if is_silent(&err) {
            tracing::debug!("exiting quietly: {:#}", err);
            std::process::exit(0);
        }
        tracing::debug!("raw error: {:?}", err);
        eprintln!("unshorten: {:#}", err);
        std::process::exit(1);
    }
}

/// Interrupts and a closed stdout are not failures worth reporting.
fn is_silent(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ResolveError>()
            .is_some_and(ResolveError::is_interruption)
            || cause
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
