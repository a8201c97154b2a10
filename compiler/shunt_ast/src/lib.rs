//! Expression tree for shunt.
//!
//! This crate defines the [`Expr`](ast::Expr) tree built by the parser and the
//! three renderers that print it back out.

pub mod ast;
pub mod render;

pub use ast::Expr;
pub use render::{depth_line, depth_view, plain_form, precedence_form, DEPTH_SWEEPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serializes an expression tree (or any serializable value) to pretty JSON.
///
/// # Example
///
/// ```
/// use shunt_ast::{to_json, Expr};
///
/// let expr = Expr::binary(Expr::ident("a"), "+", Expr::number(1));
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains(r#""type": "Binary""#));
/// assert!(json.contains(r#""operator": "+""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an expression tree from JSON.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
