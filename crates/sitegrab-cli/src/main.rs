use sitegrab_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout is reserved for the session.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("sitegrab error: {:#}", err);
        std::process::exit(1);
    }
}
