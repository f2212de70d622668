//! Sequence classification over `1..=n`.

use crate::core::rule::{Rule, Token};
use crate::error::Result;
use std::io::Write;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Iterator over the classified tokens for `1..=n`.
///
/// A bound below 1 yields an empty sequence.
///
/// # Examples
///
/// ```
/// use fizzbuzz_rs::core::{Rule, Sequence};
///
/// let rule = Rule::new(3, 5, "Fizz", "Buzz").unwrap();
/// let lines: Vec<String> = Sequence::new(&rule, 5).map(|t| t.to_string()).collect();
/// assert_eq!(lines, ["1", "2", "Fizz", "4", "Buzz"]);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<'a> {
    rule: &'a Rule,
    values: RangeInclusive<u64>,
}

impl<'a> Sequence<'a> {
    /// Creates a sequence over `1..=n` classified by `rule`.
    #[must_use]
    pub fn new(rule: &'a Rule, n: i64) -> Self {
        // Negative bounds map to 0, which leaves 1..=0 empty
        let end = u64::try_from(n).unwrap_or(0);
        Self {
            rule,
            values: 1..=end,
        }
    }
}

impl<'a> Iterator for Sequence<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rule = self.rule;
        self.values.next().map(|k| rule.classify(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl DoubleEndedIterator for Sequence<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let rule = self.rule;
        self.values.next_back().map(|k| rule.classify(k))
    }
}

impl FusedIterator for Sequence<'_> {}

/// Writes the sequence for `1..=n` as plain text, one token per line.
///
/// # Arguments
///
/// * `writer` - Destination for the lines.
/// * `n` - Inclusive upper bound; values below 1 write nothing.
/// * `rule` - Divisors and words used to classify each value.
///
/// # Returns
///
/// The number of lines written.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
///
/// # Examples
///
/// ```
/// use fizzbuzz_rs::core::{Rule, fizzbuzz};
///
/// let rule = Rule::new(2, 3, "Fizz", "Buzz").unwrap();
/// let mut out = Vec::new();
/// let lines = fizzbuzz(&mut out, 6, &rule).unwrap();
/// assert_eq!(lines, 6);
/// assert_eq!(String::from_utf8(out).unwrap(), "1\nFizz\nBuzz\nFizz\n5\nFizzBuzz\n");
/// ```
pub fn fizzbuzz<W: Write>(writer: &mut W, n: i64, rule: &Rule) -> Result<u64> {
    let mut written = 0;
    for token in Sequence::new(rule, n) {
        writeln!(writer, "{token}")?;
        written += 1;
    }
    Ok(written)
}
