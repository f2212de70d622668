//! Divisor rule and classified tokens.
//!
//! A [`Rule`] holds the two divisors and their replacement words, with the
//! least common multiple precomputed. Classifying a value yields a
//! [`Token`] borrowing the rule's words.

use crate::core::arith::lcm;
use crate::error::RuleError;
use serde::Serialize;
use std::fmt;

/// Validated divisor/word configuration.
///
/// # Examples
///
/// ```
/// use fizzbuzz_rs::core::{Rule, Token};
///
/// let rule = Rule::new(3, 5, "Fizz", "Buzz").unwrap();
/// assert_eq!(rule.classify(9), Token::Fizz("Fizz"));
/// assert_eq!(rule.classify(15).to_string(), "FizzBuzz");
/// assert_eq!(rule.classify(7), Token::Number(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    fizz_divisor: u64,
    buzz_divisor: u64,
    fizzword: String,
    buzzword: String,
    /// `fizzword` followed by `buzzword`, built once.
    combined: String,
    /// `None` when the lcm exceeds `u64::MAX`.
    common_multiple: Option<u64>,
}

impl Rule {
    /// Creates a rule, rejecting divisors below 1.
    ///
    /// # Arguments
    ///
    /// * `a` - Divisor associated with `fizzword`.
    /// * `b` - Divisor associated with `buzzword`.
    /// * `fizzword` - Text for multiples of `a`.
    /// * `buzzword` - Text for multiples of `b`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NonPositiveDivisor`] if `a` or `b` is zero or
    /// negative.
    pub fn new(
        a: i64,
        b: i64,
        fizzword: impl Into<String>,
        buzzword: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let fizz_divisor = positive("a", a)?;
        let buzz_divisor = positive("b", b)?;
        let fizzword = fizzword.into();
        let buzzword = buzzword.into();
        let combined = format!("{fizzword}{buzzword}");

        Ok(Self {
            fizz_divisor,
            buzz_divisor,
            fizzword,
            buzzword,
            combined,
            common_multiple: lcm(fizz_divisor, buzz_divisor),
        })
    }

    /// Classifies a single value. The first matching branch wins:
    /// common multiple, multiple of `a`, multiple of `b`, otherwise the
    /// number itself.
    #[must_use]
    pub fn classify(&self, k: u64) -> Token<'_> {
        if self.common_multiple.is_some_and(|m| k % m == 0) {
            Token::FizzBuzz(&self.combined)
        } else if k % self.fizz_divisor == 0 {
            Token::Fizz(&self.fizzword)
        } else if k % self.buzz_divisor == 0 {
            Token::Buzz(&self.buzzword)
        } else {
            Token::Number(k)
        }
    }

    /// Divisor paired with the fizzword.
    #[must_use]
    pub const fn fizz_divisor(&self) -> u64 {
        self.fizz_divisor
    }

    /// Divisor paired with the buzzword.
    #[must_use]
    pub const fn buzz_divisor(&self) -> u64 {
        self.buzz_divisor
    }

    /// Word emitted for multiples of `a` only.
    #[must_use]
    pub fn fizzword(&self) -> &str {
        &self.fizzword
    }

    /// Word emitted for multiples of `b` only.
    #[must_use]
    pub fn buzzword(&self) -> &str {
        &self.buzzword
    }

    /// Least common multiple of the divisors, if it fits in a `u64`.
    #[must_use]
    pub const fn common_multiple(&self) -> Option<u64> {
        self.common_multiple
    }
}

fn positive(name: &'static str, value: i64) -> Result<u64, RuleError> {
    u64::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or(RuleError::NonPositiveDivisor { name, value })
}

/// One classified output item.
///
/// Words serialize as JSON strings and numbers as JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Token<'a> {
    /// Common multiple of both divisors: the concatenated words.
    FizzBuzz(&'a str),
    /// Multiple of `a` only.
    Fizz(&'a str),
    /// Multiple of `b` only.
    Buzz(&'a str),
    /// Neither: the value itself.
    Number(u64),
}

impl Token<'_> {
    /// Returns true if the value was replaced by a word.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        !matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FizzBuzz(word) | Self::Fizz(word) | Self::Buzz(word) => f.write_str(word),
            Self::Number(k) => write!(f, "{k}"),
        }
    }
}
