use crate::{
    error::ParseError,
    interpreter::{parser::binary::parse_sum, weighted::WeightedToken},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Reduces a flat weighted sequence to a single value.
///
/// Higher precedence binds tighter and operators of equal precedence apply
/// from left to right, so `8-3-2` is `3` and `2+2*2/2` is `4`.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if `tokens` is empty.
/// - [`ParseError::MissingOperand`] if an operator lacks an operand, which
///   includes a leading `-`.
/// - [`ParseError::MissingOperator`] if two numbers are adjacent.
///
/// # Example
/// ```
/// use flatcalc::interpreter::{parser::core::reduce, weighted::weigh};
///
/// let tokens = weigh("8-3-2").unwrap();
/// assert_eq!(reduce(&tokens).unwrap(), 3.0);
/// ```
pub fn reduce(tokens: &[WeightedToken]) -> ParseResult<f64> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let value = parse_sum(&mut iter)?;

    // Any operator was consumed by a level above, so a leftover token is
    // always an operand that directly follows another one.
    if let Some(token) = iter.next() {
        return Err(ParseError::MissingOperator { position: token.span().start });
    }

    Ok(value)
}
