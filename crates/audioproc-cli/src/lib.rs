//! audioproc CLI library.
//!
//! This crate provides the functionality behind the `audioproc` binary:
//! caller-level argument checks, output path derivation, the rebuild check,
//! and running the WAV core over the input file.

pub mod commands;
pub mod error;
pub mod freshness;
pub mod logging;
pub mod paths;
