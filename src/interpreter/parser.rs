/// Entry point of the reduction step.
///
/// Checks the sequence as a whole and reports leftover tokens.
pub mod core;

/// Binary operator parsing.
///
/// One left-associative level per operator precedence, applied while
/// parsing so that no tree is ever built.
pub mod binary;
