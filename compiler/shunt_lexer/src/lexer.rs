//! Lexer for shunt expressions using the 'logos' crate
//! Recognizes parentheses, numbers, operator runs and identifiers

use std::ops::Range;

use logos::Logos;

use crate::error::{LexError, ScanError};
use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// Expression lexer
///
/// Yields one `Result` per token; scanning does not continue past the first
/// error in [`tokenize`], but the iterator itself keeps going so callers can
/// collect every problem if they want to.
pub struct Lexer<'source> {
    /// The source text being lexed
    source: &'source str,
    /// The logos lexer instance
    inner: logos::Lexer<'source, LogosToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Byte offset up to which `line` and `column` are accurate
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance line/column tracking to the start of `span`.
    ///
    /// Counts characters, not bytes, so operators such as `€` occupy a single
    /// column.
    fn sync_position_to(&mut self, span: &Range<usize>) -> Location {
        let skipped = &self.source[self.offset..span.start];
        for c in skipped.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = span.start;
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    fn convert_token(&self, logos_token: LogosToken, lexeme: &str, location: Location) -> Token {
        let token_type = match logos_token {
            LogosToken::LParen => TokenType::LParen,
            LogosToken::RParen => TokenType::RParen,
            LogosToken::Number(n) => TokenType::Number(n),
            LogosToken::Operator => TokenType::Operator(lexeme.to_string()),
            LogosToken::Identifier => TokenType::Identifier(lexeme.to_string()),
        };
        Token::new(token_type, lexeme, location)
    }

    fn convert_error(&self, error: ScanError, lexeme: &str, location: Location) -> LexError {
        match error {
            ScanError::NumberOutOfRange => LexError::NumberOutOfRange {
                literal: lexeme.to_string(),
                location,
            },
            ScanError::Unrecognized => LexError::UnexpectedCharacter {
                character: lexeme.chars().next().unwrap_or('\u{FFFD}'),
                location,
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let scanned = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = self.inner.slice();
        let location = self.sync_position_to(&span);

        let item = match scanned {
            Ok(token) => Ok(self.convert_token(token, lexeme, location)),
            Err(error) => Err(self.convert_error(error, lexeme, location)),
        };

        trace_item(&item);
        Some(item)
    }
}

#[cfg(feature = "logging")]
fn trace_item(item: &Result<Token, LexError>) {
    match item {
        Ok(token) => log::trace!("token {:?} at {}", token.token_type, token.location),
        Err(err) => log::debug!("lex error: {err}"),
    }
}

#[cfg(not(feature = "logging"))]
fn trace_item(_item: &Result<Token, LexError>) {}

/// Tokenize an entire input line, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "logging")]
    log::debug!("tokenized {} tokens from {} bytes", tokens.len(), source.len());

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn types(source: &str) -> Vec<TokenType> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    fn op(s: &str) -> TokenType {
        TokenType::Operator(s.to_string())
    }

    fn ident(s: &str) -> TokenType {
        TokenType::Identifier(s.to_string())
    }

    #[test]
    fn test_lexer_basic() {
        init_logger();
        assert_eq!(
            types("a + b * 12"),
            vec![
                ident("a"),
                op("+"),
                ident("b"),
                op("*"),
                TokenType::Number(12)
            ]
        );
    }

    #[test]
    fn test_operator_runs_are_maximal() {
        assert_eq!(
            types("x>>=y ??? z"),
            vec![ident("x"), op(">>="), ident("y"), op("???"), ident("z")]
        );
        // No whitespace between two symbol runs means one operator.
        assert_eq!(types("a +- b"), vec![ident("a"), op("+-"), ident("b")]);
    }

    #[test]
    fn test_full_operator_alphabet() {
        let alphabet = "!.^*/+-:=<>&|$#¤%?@£€¥~§½¶";
        assert_eq!(types(alphabet), vec![op(alphabet)]);
    }

    #[test]
    fn test_sign_is_a_separate_operator() {
        assert_eq!(types("-5"), vec![op("-"), TokenType::Number(5)]);
    }

    #[test]
    fn test_parentheses_are_single_characters() {
        assert_eq!(
            types("((f))"),
            vec![
                TokenType::LParen,
                TokenType::LParen,
                ident("f"),
                TokenType::RParen,
                TokenType::RParen
            ]
        );
    }

    #[test]
    fn test_digits_then_letters_split() {
        assert_eq!(types("12ab"), vec![TokenType::Number(12), ident("ab")]);
        assert_eq!(types("a1_b2"), vec![ident("a1_b2")]);
    }

    #[test]
    fn test_whitespace_variants() {
        assert_eq!(types(" \t a \t"), vec![ident("a")]);
        assert!(types("   ").is_empty());
        assert!(types("").is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("a \\ b").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '\\',
                location: Location {
                    line: 1,
                    column: 3,
                    offset: 2,
                },
            }
        );
        assert!(err.to_string().contains("'\\'"));
    }

    #[test]
    fn test_underscore_cannot_start_identifier() {
        assert!(matches!(
            tokenize("_x"),
            Err(LexError::UnexpectedCharacter { character: '_', .. })
        ));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = tokenize("99999999999999999999999").unwrap_err();
        assert!(matches!(err, LexError::NumberOutOfRange { .. }));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize("a € b").unwrap();
        let columns: Vec<usize> = tokens.iter().map(|t| t.location.column).collect();
        assert_eq!(columns, vec![1, 3, 5]);
        assert_eq!(tokens[1].lexeme, "€");
        assert_eq!(tokens[2].location.offset, "a € ".len());
    }

    proptest! {
        // Whitespace is the only thing the lexer drops.
        #[test]
        fn lexemes_cover_input(
            words in prop::collection::vec("[a-z][a-z0-9_]{0,3}|[0-9]{1,5}|[-+*/<>=.$:&|]{1,3}|[()]", 0..12)
        ) {
            let source = words.join(" ");
            let tokens = tokenize(&source).unwrap();
            let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
            prop_assert_eq!(joined, source.replace(' ', ""));
            prop_assert_eq!(tokens.len(), words.len());
        }
    }
}
