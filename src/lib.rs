//! # flatcalc
//!
//! flatcalc evaluates arithmetic expressions written as text: decimal
//! numbers, the binary operators `+ - * /` and nested parentheses.
//!
//! Evaluation never builds a syntax tree. Parenthesized groups are resolved
//! recursively into numbers, and the remaining flat sequence is reduced by
//! operator precedence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Evaluator;

/// Provides the error types of every stage.
///
/// # Responsibilities
/// - Separates lexical failures from malformed expressions.
/// - Wraps both in a single [`error::Error`] returned by [`evaluate`].
pub mod error;
/// Implements the evaluation pipeline: lexer, group resolution, weighting,
/// reduction.
pub mod interpreter;
/// Locale-independent number parsing and formatting, and whitespace removal.
pub mod util;

/// Evaluates an arithmetic expression with the default configuration.
///
/// Division by zero is not an error: it yields an infinite or NaN value.
///
/// # Errors
/// Returns an error if the expression contains an unknown character, is
/// malformed, or nests parentheses deeper than
/// [`DEFAULT_MAX_DEPTH`](interpreter::evaluator::core::DEFAULT_MAX_DEPTH).
///
/// # Examples
/// ```
/// use flatcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 2 * 2 / 2").unwrap(), 4.0);
/// assert_eq!(evaluate("(1.0 + (1.0 + 3.0 / (1.0 + 1.0))) * (2.0 / 2.0) + 8.0").unwrap(),
///            11.5);
///
/// // Negation is not part of the language.
/// assert!(evaluate("(-3)").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, error::Error> {
    Evaluator::new().evaluate(expression)
}
