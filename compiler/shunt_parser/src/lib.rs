//! Recursive shunting-yard parser for shunt expressions.

pub mod config;
pub mod error;
pub mod operators;
pub mod parser;

pub use config::ParserConfig;
pub use error::ParseError;
pub use operators::{lookup, Associativity, OperatorDefinition};
pub use parser::{parse, parse_from, Parser};
