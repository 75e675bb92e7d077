//! Process command implementation
//!
//! Checks the caller's paths, skips work when the outputs are newer than the
//! input, prepares the output directories, and runs the WAV core over the
//! input.

use anyhow::{Context, Result};
use audioproc_wav::{parse_wav, PcmError, SUPPORTED_SAMPLE_RATE};
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use super::json_output::{JsonError, ProcessOutput, SampleSummary};
use crate::error::CliError;
use crate::freshness::needs_update;
use crate::paths::OutputPaths;

/// Error code for I/O failures that are not caller errors.
const IO_ERROR_CODE: &str = "CLI_004";

/// Arguments for the process command.
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    /// Input WAV file.
    pub input: PathBuf,
    /// Extensionless output base.
    pub output: PathBuf,
    /// Run even if the outputs are up to date.
    pub force: bool,
    /// Print machine-readable JSON instead of colored text.
    pub json: bool,
}

/// Result of a process run that got past the caller checks.
#[derive(Debug)]
pub enum Outcome {
    /// Outputs were newer than the input.
    UpToDate(OutputPaths),
    /// The input was accepted.
    Parsed {
        /// Derived output paths.
        paths: OutputPaths,
        /// What was found.
        summary: SampleSummary,
    },
    /// The input was rejected by the WAV core.
    Rejected {
        /// Derived output paths.
        paths: OutputPaths,
        /// Why it was rejected.
        error: PcmError,
    },
}

/// Runs the process command and prints the outcome.
///
/// # Returns
/// Exit code: 0 if the input was accepted or nothing needed doing, 1 if it
/// was rejected
pub fn run(args: &ProcessArgs) -> Result<ExitCode> {
    if args.json {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Executes the command without printing anything.
///
/// Caller errors come back as [`CliError`] inside the `anyhow::Error`.
pub fn execute(args: &ProcessArgs) -> Result<Outcome> {
    if !args.input.exists() {
        return Err(CliError::InputMissing {
            path: args.input.clone(),
        }
        .into());
    }
    let paths = OutputPaths::derive(&args.output)?;

    if !args.force {
        let stale = needs_update(&args.input, &paths.files())
            .with_context(|| format!("Failed to check timestamps of {}", args.input.display()))?;
        if !stale {
            debug!("outputs for {} are up to date", args.input.display());
            return Ok(Outcome::UpToDate(paths));
        }
    }

    paths
        .create_parent_dirs()
        .context("Failed to create output directories")?;

    let data = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    match parse_wav(&data) {
        Ok(buffer) => {
            let summary = SampleSummary {
                channels: buffer.channels,
                samples: buffer.len(),
                frames: buffer.frame_count(),
                sample_rate: SUPPORTED_SAMPLE_RATE,
                duration_secs: buffer.duration_secs(SUPPORTED_SAMPLE_RATE),
            };
            Ok(Outcome::Parsed { paths, summary })
        }
        Err(error) => {
            debug!("{}: {}", args.input.display(), error);
            Ok(Outcome::Rejected { paths, error })
        }
    }
}

/// Run with human-readable (colored) output.
fn run_human(args: &ProcessArgs) -> Result<ExitCode> {
    println!("{} {}", "Input:".cyan().bold(), args.input.display());

    match execute(args)? {
        Outcome::UpToDate(paths) => {
            println!(
                "{} {} and {} are up to date",
                "SKIP".dimmed(),
                paths.header.display(),
                paths.source.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Parsed { paths, summary } => {
            println!("{} {}", "Header:".cyan().bold(), paths.header.display());
            println!("{} {}", "Source:".cyan().bold(), paths.source.display());
            println!("{} {}", "Symbol:".cyan().bold(), paths.symbol);
            println!(
                "{} {} ch, {} samples ({} frames), {:.3} s at {} Hz",
                "OK".green().bold(),
                summary.channels,
                summary.samples,
                summary.frames,
                summary.duration_secs,
                summary.sample_rate
            );
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected { error, .. } => {
            println!(
                "{} {}: {} [{}]",
                "REJECTED".red().bold(),
                args.input.display(),
                error,
                error.code()
            );
            Ok(ExitCode::from(1))
        }
    }
}

/// Run with machine-readable JSON output.
fn run_json(args: &ProcessArgs) -> Result<ExitCode> {
    let file = args.input.display().to_string();

    let (output, code) = match execute(args) {
        Ok(Outcome::UpToDate(paths)) => (
            ProcessOutput {
                success: true,
                up_to_date: true,
                ..with_paths(ProcessOutput::failure(Vec::new()), &paths)
            },
            ExitCode::SUCCESS,
        ),
        Ok(Outcome::Parsed { paths, summary }) => (
            ProcessOutput {
                success: true,
                summary: Some(summary),
                ..with_paths(ProcessOutput::failure(Vec::new()), &paths)
            },
            ExitCode::SUCCESS,
        ),
        Ok(Outcome::Rejected { paths, error }) => {
            let json_error = JsonError::new(error.code(), error.to_string()).with_file(&file);
            (
                with_paths(ProcessOutput::failure(vec![json_error]), &paths),
                ExitCode::from(1),
            )
        }
        Err(e) => {
            let code = e
                .downcast_ref::<CliError>()
                .map(CliError::code)
                .unwrap_or(IO_ERROR_CODE);
            let json_error = JsonError::new(code, format!("{:#}", e)).with_file(&file);
            (ProcessOutput::failure(vec![json_error]), ExitCode::from(1))
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(code)
}

fn with_paths(mut output: ProcessOutput, paths: &OutputPaths) -> ProcessOutput {
    output.header = Some(paths.header.display().to_string());
    output.source = Some(paths.source.display().to_string());
    output.symbol = Some(paths.symbol.clone());
    output
}
