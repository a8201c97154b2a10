use log::{debug, info};
use shunt_ast::{depth_view, plain_form, precedence_form, to_json, Expr};
use shunt_lexer::{tokenize, LexError};
use shunt_parser::{ParseError, Parser, ParserConfig};
use thiserror::Error;

/// Any failure of a single run. None of them are recoverable.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to serialize expression tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// The parsed tree of one input line and its renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tree: Expr,
    pub precedence_form: String,
    pub plain_form: String,
    pub depth_view: Vec<String>,
}

impl Analysis {
    /// Lines printed by the default output mode, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.precedence_form.as_str(), self.plain_form.as_str()]
            .into_iter()
            .chain(self.depth_view.iter().map(String::as_str))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(to_json(&self.tree)?)
    }
}

/// Joins command-line words into the single input line.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenizes, parses and renders one input line.
pub fn analyze(line: &str, config: &ParserConfig) -> Result<Analysis, Error> {
    info!("analyzing {} byte(s) of input", line.len());
    let tokens = tokenize(line)?;
    let tree = Parser::new(&tokens, *config).parse()?;
    debug!("parsed tree with {} node(s)", tree.node_count());

    Ok(Analysis {
        precedence_form: precedence_form(&tree),
        plain_form: plain_form(&tree),
        depth_view: depth_view(&tree),
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shunt_ast::DEPTH_SWEEPS;

    #[test]
    fn test_analysis_lines() {
        let analysis = analyze("f a + b", &ParserConfig::default()).unwrap();
        let lines: Vec<&str> = analysis.lines().collect();
        assert_eq!(lines.len(), 2 + DEPTH_SWEEPS);
        assert_eq!(lines[0], "{{f a}+b}");
        assert_eq!(lines[1], "f a + b");
        assert_eq!(lines[2], "    + b");
        assert_eq!(lines[3], "f a    ");
    }

    #[test]
    fn test_join_words() {
        assert_eq!(join_words(&["a", "+", "b"]), "a + b");
        assert_eq!(join_words::<&str>(&[]), "");
    }

    #[test]
    fn test_errors_are_wrapped() {
        let config = ParserConfig::default();
        assert!(matches!(
            analyze("a \\ b", &config),
            Err(Error::Lex(LexError::UnexpectedCharacter { character: '\\', .. }))
        ));
        assert!(matches!(
            analyze("(a + b", &config),
            Err(Error::Parse(ParseError::ExpectedClosingParenthesis { .. }))
        ));
        assert!(matches!(
            analyze(")", &config),
            Err(Error::Parse(ParseError::UnbalancedExpression { .. }))
        ));
    }

    #[test]
    fn test_json_output() {
        let analysis = analyze("n 13", &ParserConfig::default()).unwrap();
        let json = analysis.to_json().unwrap();
        assert!(json.contains(r#""type": "Application""#));
        assert!(json.contains(r#""value": 13"#));
    }
}
