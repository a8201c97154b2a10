use thiserror::Error;

use crate::token::Location;

/// Failure raised while scanning input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The character at `location` starts none of the recognised token shapes.
    #[error("unexpected character '{character}' at {location}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        location: Location,
    },

    /// A digit run too large for a 64-bit literal.
    #[error("number literal '{literal}' at {location} is out of range")]
    NumberOutOfRange {
        /// The digits as written
        literal: String,
        /// Where the literal starts
        location: Location,
    },
}

impl LexError {
    /// Where in the source the error was raised.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. }
            | LexError::NumberOutOfRange { location, .. } => *location,
        }
    }
}

/// Error payload reported by the logos scanner before it is given a location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanError {
    /// No token shape matched
    #[default]
    Unrecognized,
    /// A digit run overflowed `u64`
    NumberOutOfRange,
}
