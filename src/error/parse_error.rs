use thiserror::Error;

/// Represents all errors that can occur while resolving groups and reducing a
/// flat token sequence.
///
/// Positions are byte offsets into the expression after whitespace removal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression contains no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// A `(` was opened but never closed.
    #[error("Unclosed parenthesis '(' at position {position}.")]
    UnclosedParen {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// A `)` has no matching `(` before it.
    #[error("Unmatched closing parenthesis ')' at position {position}.")]
    UnmatchedClosingParen {
        /// Offset of the closing parenthesis.
        position: usize,
    },
    /// An opening parenthesis reached the reduction step unresolved.
    #[error("Unexpected parenthesis '(' at position {position}.")]
    UnresolvedGroup {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// A pair of parentheses encloses nothing.
    #[error("Empty parentheses at position {position}.")]
    EmptyGroup {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// An operator lacks its left or right operand.
    ///
    /// This is also how a leading `-` is reported, since negation is not part
    /// of the language.
    #[error("Operator '{operator}' at position {position} is missing an operand.")]
    MissingOperand {
        /// The operator symbol.
        operator: char,
        /// Offset of the operator.
        position: usize,
    },
    /// Two operands follow each other with no operator between them.
    #[error("Expected an operator before position {position}.")]
    MissingOperator {
        /// Offset of the second operand.
        position: usize,
    },
    /// A number literal is not a valid decimal, e.g. `1.2.3`.
    #[error("Invalid number '{text}' at position {position}.")]
    InvalidNumber {
        /// The literal as written.
        text:     String,
        /// Offset of the literal.
        position: usize,
    },
    /// Parentheses are nested deeper than the evaluator allows.
    #[error("Parentheses are nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
}
