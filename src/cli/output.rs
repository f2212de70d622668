//! Output formatting for CLI commands.
//!
//! Supports text, JSON, and newline-delimited JSON output. All formats
//! stream tokens to the writer as they are classified.

use crate::core::{Rule, Sequence, fizzbuzz};
use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    Text,
    /// A single JSON array.
    Json,
    /// One JSON value per line.
    Ndjson,
}

impl OutputFormat {
    /// Parses format from string, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "ndjson" => Some(Self::Ndjson),
            _ => None,
        }
    }

    /// Returns true for the JSON-based formats.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Ndjson)
    }
}

/// Writes the classified sequence for `1..=n` in the given format.
///
/// # Returns
///
/// The number of tokens written.
///
/// # Errors
///
/// Returns an error if writing or serialization fails.
pub fn write_sequence<W: Write>(
    writer: &mut W,
    rule: &Rule,
    n: i64,
    format: OutputFormat,
) -> Result<u64> {
    match format {
        OutputFormat::Text => fizzbuzz(writer, n, rule),
        OutputFormat::Json => write_json_array(writer, Sequence::new(rule, n)),
        OutputFormat::Ndjson => write_ndjson(writer, Sequence::new(rule, n)),
    }
}

fn write_json_array<W: Write>(writer: &mut W, tokens: Sequence<'_>) -> Result<u64> {
    let mut written = 0;
    writer.write_all(b"[")?;
    for token in tokens {
        if written > 0 {
            writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut *writer, &token)?;
        written += 1;
    }
    writer.write_all(b"]\n")?;
    Ok(written)
}

fn write_ndjson<W: Write>(writer: &mut W, tokens: Sequence<'_>) -> Result<u64> {
    let mut written = 0;
    for token in tokens {
        serde_json::to_writer(&mut *writer, &token)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

/// Reports a failed run.
///
/// With a JSON format the error object goes to `out`, unless the failure
/// was writing `out` itself or the report cannot be written there. Every
/// other case writes `Error: ...` to `err_out`.
pub fn report_error<O: Write, E: Write>(
    err: &Error,
    format: OutputFormat,
    out: &mut O,
    err_out: &mut E,
) {
    if format.is_json() && !matches!(err, Error::Io(_)) {
        let message = format_error(err, format);
        if writeln!(out, "{message}").and_then(|()| out.flush()).is_ok() {
            return;
        }
    }
    // Nowhere left to report a stderr failure
    let _ = writeln!(err_out, "Error: {err}");
}

/// Formats an error for display.
///
/// Text errors are the plain message; JSON formats wrap it in an object
/// with the error category.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    #[derive(Serialize)]
    struct ErrorBody<'a> {
        kind: &'a str,
        message: String,
    }

    #[derive(Serialize)]
    struct ErrorOutput<'a> {
        error: ErrorBody<'a>,
    }

    if !format.is_json() {
        return err.to_string();
    }

    let kind = match err {
        Error::Rule(_) => "rule",
        Error::Io(_) => "io",
        Error::Command(_) => "command",
    };
    let output = ErrorOutput {
        error: ErrorBody {
            kind,
            message: err.to_string(),
        },
    };
    serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, RuleError};

    fn render(n: i64, format: OutputFormat) -> String {
        let rule = Rule::new(3, 5, "Fizz", "Buzz").unwrap();
        let mut out = Vec::new();
        write_sequence(&mut out, &rule, n, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("ndjson"), Some(OutputFormat::Ndjson));
        assert_eq!(OutputFormat::parse("unknown"), None);
    }

    #[test]
    fn test_write_text() {
        assert_eq!(render(5, OutputFormat::Text), "1\n2\nFizz\n4\nBuzz\n");
    }

    #[test]
    fn test_write_json() {
        assert_eq!(
            render(5, OutputFormat::Json),
            "[1,2,\"Fizz\",4,\"Buzz\"]\n"
        );
        assert_eq!(render(0, OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_write_json_parses() {
        let json = render(15, OutputFormat::Json);
        let values: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(values.len(), 15);
        assert_eq!(values[14], serde_json::json!("FizzBuzz"));
        assert_eq!(values[0], serde_json::json!(1));
    }

    #[test]
    fn test_write_ndjson() {
        assert_eq!(render(3, OutputFormat::Ndjson), "1\n2\n\"Fizz\"\n");
        assert_eq!(render(-1, OutputFormat::Ndjson), "");
    }

    #[test]
    fn test_format_error_text() {
        let err: Error = RuleError::NonPositiveDivisor {
            name: "b",
            value: -2,
        }
        .into();
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "rule error: divisor b must be a positive integer, got -2"
        );
    }

    #[test]
    fn test_format_error_json() {
        let err: Error = CommandError::InvalidArgument("bad".to_string()).into();
        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["kind"], "command");
        assert_eq!(value["error"]["message"], "command error: invalid argument: bad");
    }

    struct FullDevice;

    impl Write for FullDevice {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn rule_error() -> Error {
        RuleError::NonPositiveDivisor {
            name: "a",
            value: 0,
        }
        .into()
    }

    #[test]
    fn test_report_error_json_to_stdout() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        report_error(&rule_error(), OutputFormat::Json, &mut out, &mut err_out);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"]["kind"], "rule");
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_report_error_text_to_stderr() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        report_error(&rule_error(), OutputFormat::Text, &mut out, &mut err_out);

        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err_out).unwrap(),
            "Error: rule error: divisor a must be a positive integer, got 0\n"
        );
    }

    #[test]
    fn test_report_error_write_failure_skips_stdout() {
        let rule = Rule::new(3, 5, "Fizz", "Buzz").unwrap();
        let err = write_sequence(&mut FullDevice, &rule, 100, OutputFormat::Json).unwrap_err();

        let mut out = Vec::new();
        let mut err_out = Vec::new();
        report_error(&err, OutputFormat::Json, &mut out, &mut err_out);

        assert!(out.is_empty());
        let message = String::from_utf8(err_out).unwrap();
        assert!(message.starts_with("Error: I/O error: failed to write output"));
    }

    #[test]
    fn test_report_error_falls_back_when_stdout_fails() {
        let mut err_out = Vec::new();
        report_error(&rule_error(), OutputFormat::Ndjson, &mut FullDevice, &mut err_out);

        assert!(String::from_utf8(err_out).unwrap().contains("divisor a must be"));
    }
}
