/*!
# Rust Language Module

This Rust module reads the Intcode program text format and defines
the error type shared by the whole crate.

*/

#[macro_use]
mod error;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use parse::parse;

#[cfg(test)]
mod tests;
