//! Entry point for the arc2md CLI.
//!
//! Prompts for an archive path, converts it and reports the outcome. The
//! process exits with status 0 whether or not the conversion succeeded.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arc2md::cli::{error_message, prompt_archive_path, success_message};
use arc2md::{Cli, convert};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_logging(&cli);

    let archive = match prompt_archive_path(&mut io::stdin().lock(), &mut io::stdout()) {
        Ok(path) => path,
        Err(e) => {
            println!("{}", error_message(&e));
            return;
        }
    };

    match convert(&archive).await {
        Ok(output) => println!("{}", success_message(&output)),
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), error = ?e, "conversion failed");
            println!("{}", error_message(&e));
        }
    }
}

/// Log to stderr so stdout carries only the prompt and the result line.
fn setup_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
