//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::cli::output::OutputFormat;
use crate::core::Rule;
use crate::error::{CommandError, Result};
use clap::Parser;

/// fizzbuzz-rs: print 1..=n, replacing multiples of two divisors with words.
///
/// Multiples of A print FIZZWORD, multiples of B print BUZZWORD, and
/// common multiples print both words concatenated.
#[derive(Parser, Debug)]
#[command(name = "fizzbuzz-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Highest integer to include in the range.
    pub n: i64,

    /// First divisor (paired with FIZZWORD).
    pub a: i64,

    /// Second divisor (paired with BUZZWORD).
    pub b: i64,

    /// Word to print for multiples of A.
    pub fizzword: String,

    /// Word to print for multiples of B.
    pub buzzword: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json, ndjson).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Builds the validated rule from the divisor and word arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if either divisor is below 1.
    pub fn rule(&self) -> Result<Rule> {
        Ok(Rule::new(
            self.a,
            self.b,
            self.fizzword.as_str(),
            self.buzzword.as_str(),
        )?)
    }

    /// Parses the `--format` value.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] for an unknown format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.format).ok_or_else(|| {
            CommandError::InvalidArgument(format!(
                "unknown format '{}' (expected text, json, or ndjson)",
                self.format
            ))
            .into()
        })
    }
}
