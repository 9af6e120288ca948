//! Distverify CLI binary
//!
//! Command-line interface for deployment asset verification.

use clap::Parser;
use distverify::cli::Cli;
use distverify::logging::init_logging;
use distverify::{report, verify};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let options = cli.options();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create async runtime: {}", e);
            eprintln!("Error: failed to create async runtime: {}", e);
            process::exit(1);
        }
    };

    match runtime.block_on(verify::run(&options)) {
        Ok(discrepancy) => {
            info!("verification completed");
            println!("{}", report::render(&discrepancy));
        }
        Err(e) => {
            error!("verification failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
