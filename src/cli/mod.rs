//! CLI layer for fizzbuzz-rs.
//!
//! Provides the command-line interface using clap: argument parsing,
//! execution, and output formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
