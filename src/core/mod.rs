//! Core logic for fizzbuzz-rs.
//!
//! Divisor arithmetic, the classification rule, and the sequence built on
//! top of it. Nothing here touches the process environment; output goes to
//! whatever writer the caller supplies.

pub mod arith;
pub mod rule;
pub mod sequence;

pub use arith::{gcd, lcm};
pub use rule::{Rule, Token};
pub use sequence::{Sequence, fizzbuzz};
