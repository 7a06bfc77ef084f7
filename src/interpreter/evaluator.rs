/// Group resolution and the evaluation entry point.
///
/// Contains the [`core::Evaluator`] configuration and the recursive walk that
/// replaces every parenthesized group by its value before reduction.
pub mod core;
