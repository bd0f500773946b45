#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;
mod command;
mod format;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use command::{CommandStrategy, InitStrategy, LookupInput, LookupStrategy};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init {
        return InitStrategy.execute(()).await;
    }

    let Some(word) = cli.word else {
        println!("{}", format::usage_hint());
        return Ok(());
    };

    LookupStrategy
        .execute(LookupInput {
            word,
            all: cli.all,
            limit: cli.limit,
            save: cli.save,
            max: cli.max,
        })
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Logging konnte nicht initialisiert werden: {e}");
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fehler: {e:#}");
            ExitCode::FAILURE
        }
    }
}
