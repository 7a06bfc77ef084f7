use std::iter::Peekable;

use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        weighted::{Operator, WeightedToken},
    },
};

/// Parses addition and subtraction.
///
/// The rule is: `sum := product (("+" | "-") product)*`
pub fn parse_sum<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a WeightedToken>
{
    parse_level(tokens, Operator::Add.precedence(), parse_product)
}

/// Parses multiplication.
///
/// The rule is: `product := quotient ("*" quotient)*`
pub fn parse_product<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a WeightedToken>
{
    parse_level(tokens, Operator::Mul.precedence(), parse_quotient)
}

/// Parses division.
///
/// Division binds tighter than multiplication, so `a*b/c` is `a*(b/c)`
/// while `a/b*c` is `(a/b)*c`.
///
/// The rule is: `quotient := operand ("/" operand)*`
pub fn parse_quotient<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a WeightedToken>
{
    parse_level(tokens, Operator::Div.precedence(), parse_operand)
}

/// Parses a single operand.
///
/// # Errors
/// An operator in operand position has nothing on its left, which is how a
/// leading or doubled operator such as `-3` or `2*-3` is reported.
pub fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a WeightedToken>
{
    match tokens.next() {
        Some(WeightedToken::Number { value, .. }) => Ok(*value),
        Some(WeightedToken::Operator { op, span }) => {
            Err(ParseError::MissingOperand { operator: op.symbol(),
                                             position: span.start, })
        },
        None => Err(ParseError::EmptyExpression),
    }
}

/// Parses one left-associative level whose operands are parsed by `tighter`.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      precedence: u8,
                      tighter: fn(&mut Peekable<I>) -> ParseResult<f64>)
                      -> ParseResult<f64>
    where I: Iterator<Item = &'a WeightedToken>
{
    let mut left = tighter(tokens)?;

    while let Some(op) = take_operator(tokens, precedence)? {
        let right = tighter(tokens)?;
        let value = op.apply(left, right);
        trace!(left, op = %op.symbol(), right, value, "applied operator");
        left = value;
    }

    Ok(left)
}

/// Consumes the next token if it is an operator of exactly `precedence`.
///
/// An operator that ends the sequence has no right operand and is reported
/// here, where its position is still known.
fn take_operator<'a, I>(tokens: &mut Peekable<I>, precedence: u8) -> ParseResult<Option<Operator>>
    where I: Iterator<Item = &'a WeightedToken>
{
    let Some(&WeightedToken::Operator { op, ref span }) = tokens.peek().copied() else {
        return Ok(None);
    };
    if op.precedence() != precedence {
        return Ok(None);
    }

    let position = span.start;
    tokens.next();

    if tokens.peek().is_none() {
        return Err(ParseError::MissingOperand { operator: op.symbol(),
                                                position });
    }

    Ok(Some(op))
}
