//! Command-line interface
//!
//! Argument definitions (clap derive) and table/JSON output for the
//! `ringclock` binary.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
