//! Greatest common divisor of two integers read from standard input.
//!
//! The computation lives in [`gcd`]; [`input`] turns a text stream into the
//! two operands. [`config`] and [`logger`] only affect diagnostics on stderr.

pub mod config;
pub mod gcd;
pub mod input;
pub mod logger;

pub use gcd::gcd;
pub use input::{parse_operands, read_operands, InputParseError};
