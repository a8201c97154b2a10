//! shunt lexical analyzer
//!
//! Converts a line of text into the token sequence consumed by the
//! shunting-yard parser: parentheses, non-negative integers, identifiers and
//! free-form operator runs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
#[allow(missing_docs)]
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use token::{Location, Token, TokenType};
