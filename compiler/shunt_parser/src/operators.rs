//! Fixed operator table.
//!
//! Any run of operator-alphabet characters is a valid operator; spellings
//! without an entry here resolve to [`DEFAULT_DEFINITION`].

use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    /// Conventionally forbids chaining at equal precedence. The parser only
    /// enforces that in strict mode; otherwise it groups like `Right`.
    NonAssoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorDefinition {
    /// Higher binds tighter.
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorDefinition {
    pub const fn new(precedence: u8, associativity: Associativity) -> Self {
        Self {
            precedence,
            associativity,
        }
    }

    /// Whether an operator already on the stack (`self`) must be reduced
    /// before `incoming` is pushed.
    pub fn reduces_before(&self, incoming: &OperatorDefinition) -> bool {
        self.precedence > incoming.precedence
            || (incoming.associativity == Associativity::Left
                && self.precedence == incoming.precedence)
    }
}

/// Definition used for every spelling missing from the table.
pub const DEFAULT_DEFINITION: OperatorDefinition =
    OperatorDefinition::new(10, Associativity::Left);

use Associativity::{Left, NonAssoc, Right};

const FIXITIES: &[(&str, u8, Associativity)] = &[
    (".", 9, Right),
    ("!!", 9, Left),
    ("^", 8, Right),
    ("^^", 8, Right),
    ("**", 8, Right),
    ("*", 7, Left),
    ("/", 7, Left),
    ("+", 6, Left),
    ("-", 6, Left),
    ("<>", 6, Right),
    (":", 5, Right),
    ("++", 5, Right),
    ("==", 4, NonAssoc),
    ("/=", 4, NonAssoc),
    ("!=", 4, NonAssoc),
    ("<", 4, NonAssoc),
    ("<=", 4, NonAssoc),
    (">", 4, NonAssoc),
    (">=", 4, NonAssoc),
    ("<$>", 4, Left),
    ("<$", 4, Left),
    ("<*>", 4, Left),
    ("*>", 4, Left),
    ("<*", 4, Left),
    ("&&", 3, Right),
    ("||", 2, Right),
    (">>", 1, Left),
    (">>=", 1, Left),
    ("=<<", 1, Right),
    ("$", 0, Right),
    ("$!", 0, Right),
];

lazy_static! {
    static ref OPERATOR_TABLE: HashMap<&'static str, OperatorDefinition> = FIXITIES
        .iter()
        .map(|&(spelling, precedence, associativity)| {
            (spelling, OperatorDefinition::new(precedence, associativity))
        })
        .collect();
}

/// Looks up an operator spelling. Never fails.
pub fn lookup(spelling: &str) -> OperatorDefinition {
    OPERATOR_TABLE
        .get(spelling)
        .copied()
        .unwrap_or(DEFAULT_DEFINITION)
}

/// Whether `spelling` has its own entry rather than the default.
pub fn is_known(spelling: &str) -> bool {
    OPERATOR_TABLE.contains_key(spelling)
}

/// The explicit table entries, in declaration order.
pub fn known_operators() -> impl Iterator<Item = (&'static str, OperatorDefinition)> {
    FIXITIES
        .iter()
        .map(|&(spelling, precedence, associativity)| {
            (spelling, OperatorDefinition::new(precedence, associativity))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_entries() {
        assert_eq!(lookup("+"), OperatorDefinition::new(6, Left));
        assert_eq!(lookup("*"), OperatorDefinition::new(7, Left));
        assert_eq!(lookup(":"), OperatorDefinition::new(5, Right));
        assert_eq!(lookup("<="), OperatorDefinition::new(4, NonAssoc));
        assert_eq!(lookup("$"), OperatorDefinition::new(0, Right));
    }

    #[test]
    fn test_unknown_spelling_uses_default() {
        assert!(!is_known("???"));
        assert_eq!(lookup("???"), DEFAULT_DEFINITION);
        assert_eq!(DEFAULT_DEFINITION.precedence, 10);
        assert_eq!(DEFAULT_DEFINITION.associativity, Left);
    }

    #[test]
    fn test_spellings_are_unique() {
        assert_eq!(OPERATOR_TABLE.len(), FIXITIES.len());
        assert_eq!(known_operators().count(), FIXITIES.len());
        assert!(known_operators().all(|(spelling, _)| is_known(spelling)));
    }

    #[test]
    fn test_reduces_before() {
        let plus = lookup("+");
        let times = lookup("*");
        let cons = lookup(":");
        let less = lookup("<");
        assert!(times.reduces_before(&plus));
        assert!(!plus.reduces_before(&times));
        // left-associative ties reduce
        assert!(plus.reduces_before(&lookup("-")));
        // right and non-associative ties defer
        assert!(!cons.reduces_before(&cons));
        assert!(!less.reduces_before(&less));
    }

    proptest! {
        #[test]
        fn lookup_is_total(spelling in "[!.^*/+\\-:=<>&|$#¤%?@£€¥~§½¶]{1,6}") {
            let definition = lookup(&spelling);
            if !is_known(&spelling) {
                prop_assert_eq!(definition, DEFAULT_DEFINITION);
            }
        }
    }
}
