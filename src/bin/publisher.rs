// src/bin/publisher.rs

//! # Publisher Binary
//!
//! Single-shot publisher for QueueBlaster:
//!
//! 1.  **Loading inputs**: reads the message file and the broker config file.
//!     Either one missing, empty or incomplete ends the run before any network
//!     traffic.
//!
//! 2.  **Publishing**: opens one RabbitMQ connection and one channel, then
//!     publishes the message to every configured queue in order. A failed
//!     queue is logged and skipped unless `--on-publish-error fail-fast` is
//!     given.
//!
//! 3.  **Exit status**: zero on success, otherwise a code per failure class
//!     (see `PublisherError::exit_code`).
//!
//! The run is driven on a current-thread tokio runtime, so every step happens
//! one after the other on the main thread.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info};
use QueueBlaster::config::Args;
use QueueBlaster::publisher_logic::{execute_run, LapinConnector};
use QueueBlaster::utils::build_subscriber;

fn wait_for_enter() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Scoped to main; dropped when the run is over.
    let _log_guard = tracing::subscriber::set_default(build_subscriber(args.log_format));
    info!("Logging initialized");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let exit_code = match runtime.block_on(execute_run(&LapinConnector, &args)) {
        Ok(report) => {
            info!(
                "Done: message sent to {}/{} queue(s)",
                report.succeeded(),
                report.attempted()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Publisher failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    };

    if args.pause_on_exit {
        wait_for_enter();
    }
    exit_code
}
