//! Thin CLI front door around `aba-sched-core`: reads a `SolveRequest` as
//! JSON, writes the `SolveResponse` as JSON, does no persistence or network
//! work of its own.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use aba_sched_core::model::SolveRequest;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a SolveRequest JSON file; omit to read stdin instead.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    let mut buf = String::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_string(&mut buf)?;
        }
        None => {
            io::stdin().read_to_string(&mut buf)?;
        }
    }
    Ok(buf)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = read_input(args.input.as_ref()).context("failed to read input")?;

    let request: SolveRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("malformed SolveRequest JSON: {err}");
            std::process::exit(1);
        }
    };

    let response = aba_sched_core::solve(&request)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &response)?;
    writeln!(handle)?;

    Ok(())
}
