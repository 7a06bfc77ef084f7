/// The evaluator drives the whole pipeline.
///
/// It strips whitespace, resolves parenthesized groups recursively from left
/// to right, and hands the remaining flat sequence to the parser for
/// reduction. It also carries the evaluator configuration.
///
/// # Responsibilities
/// - Resolves groups by position, so repeated group text is harmless.
/// - Bounds recursion by the configured nesting limit.
pub mod evaluator;
/// The group module locates parenthesized sub-expressions.
///
/// # Responsibilities
/// - Finds the first complete group of an expression.
/// - Reports an unterminated `(`.
pub mod grouping;
/// The lexer module tokenizes expression text.
///
/// The tokenizer is a cursor that always has a current token and classifies
/// each lexeme as a number, an operator, the end of input or an unknown
/// character. It knows nothing about grammar or precedence.
///
/// # Responsibilities
/// - Converts the whitespace-stripped character stream into tokens with
///   their source spans.
/// - Signals unknown characters without failing.
pub mod lexer;
/// The parser module reduces a flat weighted sequence to a value.
///
/// # Responsibilities
/// - Applies operators by precedence, left to right within a level.
/// - Reports missing operands and operators.
pub mod parser;
/// The weighted module annotates flat tokens with their precedence.
///
/// # Responsibilities
/// - Defines the arithmetic [`weighted::Operator`] and its precedence.
/// - Converts flat text into [`weighted::WeightedToken`]s, turning unknown
///   characters and stray parentheses into errors.
pub mod weighted;
