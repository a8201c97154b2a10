//! Recursive shunting-yard parser.
//!
//! Each nesting level (the whole input, the inside of a pair of parentheses)
//! is parsed by one call to [`Parser::parse_from`] with its own output and
//! operator stacks. A level ends at the end of input or at a `)` it did not
//! open; the `)` is left for the caller, which knows whether one was expected.
//!
//! An identifier greedily takes every following identifier, number or
//! parenthesized group as an argument, so application binds tighter than any
//! operator: `f a + b` is `(f a) + b`.

use log::{debug, trace};
use shunt_ast::Expr;
use shunt_lexer::{Location, Token, TokenType};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::operators::{self, Associativity, OperatorDefinition};


/// Parses token sequences into expression trees.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    config: ParserConfig,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], config: ParserConfig) -> Self {
        Self { tokens, config }
    }

    /// Parses the whole token sequence into a single tree.
    ///
    /// A `)` with no matching `(` fails with
    /// [`ParseError::UnbalancedExpression`].
    pub fn parse(&self) -> Result<Expr, ParseError> {
        let (expr, next) = self.parse_from(0)?;
        if let Some(stray) = self.tokens.get(next) {
            debug!("unmatched ')' at {}", stray.location);
            return Err(ParseError::unbalanced(Some(stray.location)));
        }
        Ok(expr)
    }

    /// Parses one balanced expression starting at `start`.
    ///
    /// Returns the tree and the index where parsing stopped: either the end of
    /// the token sequence or an unconsumed `)`.
    pub fn parse_from(&self, start: usize) -> Result<(Expr, usize), ParseError> {
        trace!("entering level at token {start}");
        let mut level = Level::default();
        let mut pos = start;

        while let Some(token) = self.tokens.get(pos) {
            match &token.token_type {
                TokenType::Number(value) => {
                    level.output.push(Expr::number(*value));
                    pos += 1;
                }
                TokenType::Operator(spelling) => {
                    level.push_operator(spelling, token.location, &self.config)?;
                    pos += 1;
                }
                TokenType::Identifier(name) => {
                    let (expr, next) = self.application(name, pos + 1)?;
                    level.output.push(expr);
                    pos = next;
                }
                TokenType::LParen => {
                    let (expr, next) = self.parenthesized(pos)?;
                    level.output.push(expr);
                    pos = next;
                }
                TokenType::RParen => {
                    let expr = level.finish(Some(token.location))?;
                    trace!("leaving level at ')' {pos}");
                    return Ok((expr, pos));
                }
            }
        }

        let expr = level.finish(None)?;
        trace!("leaving level at end of input");
        Ok((expr, pos))
    }

    /// Parses the group opened by the `(` at `open`, returning the
    /// parenthesized tree and the index just past the matching `)`.
    fn parenthesized(&self, open: usize) -> Result<(Expr, usize), ParseError> {
        let (inner, close) = self.parse_from(open + 1)?;
        match self.tokens.get(close) {
            Some(token) if token.token_type == TokenType::RParen => {
                Ok((Expr::paren(inner), close + 1))
            }
            Some(token) => Err(ParseError::ExpectedClosingParenthesis {
                found: Some(token.token_type.clone()),
                location: Some(token.location),
            }),
            None => Err(ParseError::ExpectedClosingParenthesis {
                found: None,
                location: None,
            }),
        }
    }

    /// Collects the arguments juxtaposed after the identifier `callee`,
    /// starting at `pos`. No precedence is involved: every adjacent atom is
    /// taken.
    fn application(&self, callee: &str, mut pos: usize) -> Result<(Expr, usize), ParseError> {
        let mut args = Vec::new();

        while let Some(token) = self.tokens.get(pos) {
            match &token.token_type {
                TokenType::Identifier(name) => {
                    args.push(Expr::ident(name.as_str()));
                    pos += 1;
                }
                TokenType::Number(value) => {
                    args.push(Expr::number(*value));
                    pos += 1;
                }
                TokenType::LParen => {
                    let (arg, next) = self.parenthesized(pos)?;
                    args.push(arg);
                    pos = next;
                }
                TokenType::Operator(_) | TokenType::RParen => break,
            }
        }

        if !args.is_empty() {
            trace!("application of '{callee}' to {} argument(s)", args.len());
        }
        Ok((Expr::apply(Expr::ident(callee), args), pos))
    }
}

#[derive(Debug)]
struct PendingOperator {
    spelling: String,
    definition: OperatorDefinition,
    location: Location,
}

/// Output and operator stacks of one nesting level.
#[derive(Debug, Default)]
struct Level {
    output: Vec<Expr>,
    operators: Vec<PendingOperator>,
}

impl Level {
    fn push_operator(
        &mut self,
        spelling: &str,
        location: Location,
        config: &ParserConfig,
    ) -> Result<(), ParseError> {
        let definition = operators::lookup(spelling);
        if !operators::is_known(spelling) {
            debug!("operator '{spelling}' not in table, using default definition");
        }

        while let Some(top) = self.operators.last() {
            if config.strict_non_associative
                && top.definition.precedence == definition.precedence
                && (top.definition.associativity == Associativity::NonAssoc
                    || definition.associativity == Associativity::NonAssoc)
            {
                return Err(ParseError::NonAssociativeChain {
                    left: top.spelling.clone(),
                    right: spelling.to_string(),
                    location,
                });
            }
            if !top.definition.reduces_before(&definition) {
                break;
            }
            self.reduce()?;
        }

        trace!("push operator '{spelling}' ({definition:?})");
        self.operators.push(PendingOperator {
            spelling: spelling.to_string(),
            definition,
            location,
        });
        Ok(())
    }

    fn reduce(&mut self) -> Result<(), ParseError> {
        let Some(op) = self.operators.pop() else {
            return Err(ParseError::unbalanced(None));
        };
        let (Some(right), Some(left)) = (self.output.pop(), self.output.pop()) else {
            debug!("operator '{}' at {} is missing an operand", op.spelling, op.location);
            return Err(ParseError::unbalanced(Some(op.location)));
        };
        trace!("reduce '{}'", op.spelling);
        self.output.push(Expr::binary(left, op.spelling, right));
        Ok(())
    }

    /// Drains the operator stack and returns the level's single value.
    fn finish(mut self, end: Option<Location>) -> Result<Expr, ParseError> {
        while !self.operators.is_empty() {
            self.reduce()?;
        }
        match (self.output.pop(), self.output.is_empty()) {
            (Some(expr), true) => Ok(expr),
            _ => Err(ParseError::unbalanced(end)),
        }
    }
}

/// Parses a whole token sequence with the default configuration.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens, ParserConfig::default()).parse()
}

/// Parses one balanced expression from `start` with the default
/// configuration. See [`Parser::parse_from`].
pub fn parse_from(tokens: &[Token], start: usize) -> Result<(Expr, usize), ParseError> {
    Parser::new(tokens, ParserConfig::default()).parse_from(start)
}
