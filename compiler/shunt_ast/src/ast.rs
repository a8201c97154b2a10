// Expression tree produced by the shunting-yard parser.
// Every node owns its children; nothing is shared.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum Expr {
    Number(u64),
    Identifier(String),
    /// Juxtaposition: `callee arg1 arg2 ...`, always with at least one argument.
    Application {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// A sub-expression the source wrapped in literal parentheses.
    Parenthesized(Box<Expr>),
    Binary {
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: u64) -> Self {
        Expr::Number(value)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    /// Builds an application node. An empty argument list yields the callee
    /// itself, so an `Application` never has zero arguments.
    pub fn apply(callee: Expr, args: Vec<Expr>) -> Self {
        if args.is_empty() {
            return callee;
        }
        Expr::Application {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn paren(inner: Expr) -> Self {
        Expr::Parenthesized(Box::new(inner))
    }

    pub fn binary(left: Expr, operator: impl Into<String>, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Identifier(_))
    }

    /// Number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Identifier(_) => 1,
            Expr::Application { callee, args } => {
                1 + callee.node_count() + args.iter().map(Expr::node_count).sum::<usize>()
            }
            Expr::Parenthesized(inner) => 1 + inner.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Displays the plain form: the source spelling with canonical spacing.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::plain_form(self))
    }
}
