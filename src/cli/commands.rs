//! CLI command implementation.

use crate::cli::output::write_sequence;
use crate::cli::parser::Cli;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Executes the CLI command, streaming the sequence to `writer`.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `writer` - Destination for the sequence (stdout in the binary).
///
/// # Returns
///
/// The number of tokens written.
///
/// # Errors
///
/// Returns an error if the format is unknown, a divisor is not positive,
/// or writing fails.
pub fn execute<W: Write>(cli: &Cli, writer: &mut W) -> Result<u64> {
    let format = cli.output_format()?;
    let rule = cli.rule()?;

    debug!(
        n = cli.n,
        a = rule.fizz_divisor(),
        b = rule.buzz_divisor(),
        common_multiple = ?rule.common_multiple(),
        ?format,
        "classifying sequence"
    );

    let written = write_sequence(writer, &rule, cli.n, format)?;
    writer.flush()?;

    debug!(written, "sequence complete");
    Ok(written)
}
