//! Command-line interface for pipespec.
//!
//! Provides commands for validating, inspecting and hashing component
//! specification documents.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
