use logos::Logos;

use crate::error::ScanError;

/// Raw token type recognised by the logos scanner.
///
/// Maximal munch across the regexes below gives the same result as trying
/// whitespace, parentheses, digits, operator runs and identifiers in turn.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ScanError)]
#[logos(skip r"\s+")]
pub enum LogosToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().map_err(|_| ScanError::NumberOutOfRange))]
    Number(u64),

    // ! . ^ * / + - : = < > & | $ # ¤ % ? @ £ € ¥ ~ § ½ ¶
    #[regex(r"[!\.\^\*/\+\-:=<>\&\|\$#¤%\?@£€¥\~§½¶]+")]
    Operator,

    #[regex(r"\p{L}[\p{L}0-9_]*")]
    Identifier,
}
