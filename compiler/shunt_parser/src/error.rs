use shunt_lexer::{Location, TokenType};
use thiserror::Error;

/// Failure raised while building the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `(` was not matched by `)`. `found` is `None` at end of input.
    #[error("expected ')' but found {}", describe_found(.found, .location))]
    ExpectedClosingParenthesis {
        found: Option<TokenType>,
        location: Option<Location>,
    },

    /// A reduction ran out of operands, or a level finished with other than
    /// exactly one value.
    #[error("unbalanced expression{}", describe_location(.location))]
    UnbalancedExpression { location: Option<Location> },

    /// Two operators of equal precedence, at least one non-associative, were
    /// chained. Only raised in strict mode.
    #[error("cannot chain non-associative operators '{left}' and '{right}' at {location}")]
    NonAssociativeChain {
        left: String,
        right: String,
        location: Location,
    },
}

impl ParseError {
    pub fn unbalanced(location: Option<Location>) -> Self {
        ParseError::UnbalancedExpression { location }
    }
}

fn describe_found(found: &Option<TokenType>, location: &Option<Location>) -> String {
    let Some(token) = found else {
        return "end of input".to_string();
    };
    let text = match token {
        TokenType::LParen | TokenType::RParen => token.describe().to_string(),
        _ => format!("{} '{token}'", token.describe()),
    };
    text + &describe_location(location)
}

fn describe_location(location: &Option<Location>) -> String {
    location.map_or_else(String::new, |location| format!(" at {location}"))
}
