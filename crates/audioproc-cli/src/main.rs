//! audioproc CLI - validates PCM WAV inputs for source embedding
//!
//! This binary checks an input WAV against the supported profile and prepares
//! the output location for the generated header and source files.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use audioproc_cli::commands::process::{self, ProcessArgs};
use audioproc_cli::logging;

/// audioproc - PCM WAV validation for embedded audio
#[derive(Parser)]
#[command(name = "audioproc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input WAV file to store in code
    #[arg(short, long)]
    input: PathBuf,

    /// Output file and path without extension; a .h and a .cpp are derived from it
    #[arg(short, long)]
    output: PathBuf,

    /// Process even if the outputs are newer than the input
    #[arg(long)]
    force: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let args = ProcessArgs {
        input: cli.input,
        output: cli.output,
        force: cli.force,
        json: cli.json,
    };

    match process::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
