/// Parser options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Reject chains of equal-precedence operators when either side is
    /// non-associative, instead of grouping them to the right.
    pub strict_non_associative: bool,
}

impl ParserConfig {
    pub fn strict() -> Self {
        Self {
            strict_non_associative: true,
        }
    }
}
