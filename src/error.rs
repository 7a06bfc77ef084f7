/// Lexical errors.
///
/// Raised when the tokenizer meets a character that cannot start any lexeme.
/// The tokenizer itself never fails; it emits an `Unknown` token, and the
/// weighting step turns that token into a [`LexError`].
pub mod lex_error;
/// Malformed expression errors.
///
/// Covers everything that goes wrong after lexing: unbalanced or empty
/// parentheses, operators missing an operand, adjacent operands, number
/// literals that do not parse and nesting beyond the configured limit.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced while evaluating an expression.
///
/// Division by zero is not represented here: it yields an infinite or NaN
/// value, exactly as floating-point division does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression contains a character outside the language.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The expression is lexically valid but not well formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
