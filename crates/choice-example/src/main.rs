//! `choose` - ask a multiple-choice question on the terminal.
//!
//! Try:
//!   choose "Proceed? ([Y]es/[n]o)"
//!   choose "Colour?" --answers red,green,blue --default green
//!   choose "Overwrite? ([y]es/[n]o/[a]lways)" --persistent always --repeat 3
//!
//! Set `CHOOSE_LOG=debug` to trace how input is matched.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let mut spec = cli.spec().context("invalid choice configuration")?;

    for round in 1..=cli.repeat {
        let options = cli.query_options(&spec);
        match spec.query(options).context("reading answer")? {
            Some(answer) => {
                info!(round, answer = %answer, "answer chosen");
                println!("{}", answer);
            }
            None => {
                info!(round, "no answer");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to stderr, filtered by `CHOOSE_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CHOOSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
