use std::ops::Range;

use tracing::debug;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        grouping::scan_group,
        parser::core::reduce,
        weighted::{WeightedToken, weigh_range},
    },
    util::num::strip_whitespace,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluates expressions.
///
/// The evaluator holds configuration only; every call starts from fresh
/// token sequences, so one instance can be reused freely.
///
/// ## Usage
/// ```
/// use flatcalc::interpreter::evaluator::core::Evaluator;
///
/// let evaluator = Evaluator::new().with_max_depth(8);
/// assert_eq!(evaluator.evaluate("(1+1)+(1+1)").unwrap(), 4.0);
/// assert!(evaluator.evaluate("((((((((((1))))))))))").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Sets how deeply parentheses may nest.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluates `expression` to a number.
    ///
    /// Whitespace is removed first. Groups are then resolved from left to
    /// right: the first complete group is evaluated recursively and stands in
    /// for its span as a single number, after which the search resumes
    /// behind it. The resulting flat sequence is reduced by precedence.
    ///
    /// Infinite and NaN results are returned as values.
    ///
    /// # Errors
    /// Returns a [`LexError`](crate::error::LexError) for characters outside
    /// the language and a [`ParseError`] for malformed expressions, including
    /// nesting beyond [`Evaluator::max_depth`].
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let compact = strip_whitespace(expression);
        let value = self.evaluate_range(&compact, 0..compact.len(), 0)?;

        debug!(expression = %compact, value, "evaluated expression");
        Ok(value)
    }

    /// Resolves every group of `expression[range]` and returns the flat
    /// weighted sequence that remains.
    ///
    /// `expression` must be whitespace-free; spans are offsets into it.
    /// `depth` is the nesting level of `range`, `0` for a whole expression.
    ///
    /// # Errors
    /// Propagates any error raised while resolving a group or weighing the
    /// text between groups.
    pub fn flatten(&self,
                   expression: &str,
                   range: Range<usize>,
                   depth: usize)
                   -> EvalResult<Vec<WeightedToken>> {
        let mut tokens = Vec::new();
        let mut cursor = range.start;

        while let Some(group) = scan_group(expression, cursor..range.end)? {
            tokens.extend(weigh_range(expression, cursor..group.start)?);

            let inner = group.start + 1..group.end - 1;
            let value = self.evaluate_range(expression, inner, depth + 1)?;
            debug!(group = &expression[group.clone()], value, depth, "resolved group");

            tokens.push(WeightedToken::Number { value,
                                                span: group.clone() });
            cursor = group.end;
        }

        tokens.extend(weigh_range(expression, cursor..range.end)?);
        Ok(tokens)
    }

    fn evaluate_range(&self,
                      expression: &str,
                      range: Range<usize>,
                      depth: usize)
                      -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth }.into());
        }

        let tokens = self.flatten(expression, range.clone(), depth)?;
        if tokens.is_empty() && depth > 0 {
            return Err(ParseError::EmptyGroup { position: range.start - 1 }.into());
        }

        Ok(reduce(&tokens)?)
    }
}
