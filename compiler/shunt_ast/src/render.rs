//! Textual renderings of an expression tree.
//!
//! * [`precedence_form`] brackets every application and binary operation with
//!   `{ }` so the grouping chosen by the parser is explicit.
//! * [`plain_form`] reprints the expression with canonical spacing and no
//!   synthetic brackets; parsing it again yields the same tree.
//! * [`depth_view`] prints the plain form once per nesting level, blanking
//!   everything that does not belong to that level.

use crate::ast::Expr;

/// Number of lines produced by [`depth_view`].
pub const DEPTH_SWEEPS: usize = 12;

pub fn precedence_form(expr: &Expr) -> String {
    let mut out = String::new();
    write_precedence(expr, &mut out);
    out
}

fn write_precedence(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::Identifier(name) => out.push_str(name),
        Expr::Application { callee, args } => {
            out.push('{');
            write_precedence(callee, out);
            for arg in args {
                out.push(' ');
                write_precedence(arg, out);
            }
            out.push('}');
        }
        Expr::Parenthesized(inner) => {
            out.push('(');
            write_precedence(inner, out);
            out.push(')');
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            out.push('{');
            write_precedence(left, out);
            out.push_str(operator);
            write_precedence(right, out);
            out.push('}');
        }
    }
}

pub fn plain_form(expr: &Expr) -> String {
    let mut out = String::new();
    write_plain(expr, &mut out);
    out
}

fn write_plain(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::Identifier(name) => out.push_str(name),
        Expr::Application { callee, args } => {
            write_plain(callee, out);
            for arg in args {
                out.push(' ');
                write_plain(arg, out);
            }
        }
        Expr::Parenthesized(inner) => {
            out.push('(');
            write_plain(inner, out);
            out.push(')');
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            write_plain(left, out);
            out.push(' ');
            out.push_str(operator);
            out.push(' ');
            write_plain(right, out);
        }
    }
}

/// Renders [`DEPTH_SWEEPS`] lines, one per nesting level, top to bottom.
///
/// Every line has the same character width as the plain form. Lines are not
/// trimmed, so columns stay aligned with the plain form printed above them.
pub fn depth_view(expr: &Expr) -> Vec<String> {
    (0..DEPTH_SWEEPS)
        .map(|sweep| depth_line(expr, sweep))
        .collect()
}

/// Renders a single sweep of the depth view.
///
/// Depth assignment, starting from the root at depth 0:
/// - a leaf rendered at depth `d` shows at sweep `d - 1`;
/// - an application renders its callee and arguments at `d + 1`;
/// - parentheses show at sweep `d` and leave the inner depth unchanged;
/// - a binary operator shows at sweep `d`, its operands render at `d + 1`.
pub fn depth_line(expr: &Expr, sweep: usize) -> String {
    let mut writer = SweepWriter {
        sweep,
        out: String::new(),
    };
    writer.expr(expr, 0);
    writer.out
}

struct SweepWriter {
    sweep: usize,
    out: String,
}

impl SweepWriter {
    fn piece(&mut self, text: &str, visible: bool) {
        if visible {
            self.out.push_str(text);
        } else {
            self.out
                .extend(std::iter::repeat(' ').take(text.chars().count()));
        }
    }

    fn leaf(&mut self, text: &str, depth: usize) {
        // shown one sweep before its own depth; never at the root
        let visible = depth.checked_sub(1) == Some(self.sweep);
        self.piece(text, visible);
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        let next = depth + 1;
        match expr {
            Expr::Number(n) => self.leaf(&n.to_string(), depth),
            Expr::Identifier(name) => self.leaf(name, depth),
            Expr::Application { callee, args } => {
                self.expr(callee, next);
                for arg in args {
                    self.out.push(' ');
                    self.expr(arg, next);
                }
            }
            Expr::Parenthesized(inner) => {
                let visible = self.sweep == depth;
                self.piece("(", visible);
                self.expr(inner, depth);
                self.piece(")", visible);
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                self.expr(left, next);
                self.out.push(' ');
                self.piece(operator, self.sweep == depth);
                self.out.push(' ');
                self.expr(right, next);
            }
        }
    }
}
