//! # fizzbuzz-rs
//!
//! Configurable `FizzBuzz`.
//!
//! Prints the integers `1..=n`, replacing multiples of a first divisor with
//! a fizzword, multiples of a second divisor with a buzzword, and common
//! multiples of both with the two words concatenated.
//!
//! ## Features
//!
//! - **Integer arithmetic**: Euclidean `gcd` and overflow-checked `lcm`
//! - **Streaming**: tokens are classified lazily and written as they go
//! - **Output formats**: plain text, JSON array, or newline-delimited JSON

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{Rule, Sequence, Token, fizzbuzz, gcd, lcm};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
