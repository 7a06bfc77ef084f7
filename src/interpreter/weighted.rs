use std::ops::Range;

use crate::{
    error::{Error, LexError, ParseError},
    interpreter::lexer::{TokenKind, Tokenizer},
    util::num::parse_number,
};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Highest precedence any operator carries.
    pub const MAX_PRECEDENCE: u8 = 3;

    /// Maps an operator lexeme to its operator, if it is arithmetic.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter. Numbers weigh 0.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul => 2,
            Self::Div => 3,
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased: `1/0` is infinite and `0/0` is
    /// NaN.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// A token of a flat expression, annotated with its precedence.
///
/// Parentheses never appear in this form. A resolved group becomes a
/// `Number` whose span covers the group, parentheses included.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedToken {
    Number {
        value: f64,
        span:  Range<usize>,
    },
    Operator {
        op:   Operator,
        span: Range<usize>,
    },
}

impl WeightedToken {
    /// `0` for numbers, the operator's precedence otherwise.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Number { .. } => 0,
            Self::Operator { op, .. } => op.precedence(),
        }
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Number { span, .. } | Self::Operator { span, .. } => span.clone(),
        }
    }
}

/// Tokenizes a flat expression into weighted tokens.
///
/// The expression must not contain parentheses; group resolution happens in
/// the evaluator. Positions refer to the whitespace-stripped text.
///
/// # Errors
/// - [`LexError::UnknownCharacter`] for characters outside the language.
/// - [`ParseError::InvalidNumber`] for literals such as `1.2.3`.
/// - [`ParseError::UnresolvedGroup`] or [`ParseError::UnmatchedClosingParen`]
///   for parentheses.
///
/// # Example
/// ```
/// use flatcalc::interpreter::weighted::weigh;
///
/// let tokens = weigh("2.50 + 6.50 * 2").unwrap();
/// let weights: Vec<_> = tokens.iter().map(|t| t.precedence()).collect();
/// assert_eq!(weights, [0, 1, 0, 2, 0]);
/// ```
pub fn weigh(flat: &str) -> Result<Vec<WeightedToken>, Error> {
    weigh_at(flat, 0)
}

/// Weighs the flat segment `expression[range]`, reporting absolute positions.
///
/// `expression` must already be whitespace-free so that offsets line up.
pub(in crate::interpreter) fn weigh_range(expression: &str,
                                          range: Range<usize>)
                                          -> Result<Vec<WeightedToken>, Error> {
    weigh_at(&expression[range.clone()], range.start)
}

fn weigh_at(flat: &str, offset: usize) -> Result<Vec<WeightedToken>, Error> {
    let mut tokenizer = Tokenizer::new(flat);
    let mut tokens = Vec::new();

    loop {
        let token = tokenizer.current();
        let span = token.span.start + offset..token.span.end + offset;

        let weighted = match token.kind {
            TokenKind::EndOfInput => break,
            TokenKind::Number => WeightedToken::Number { value: parse_number(&token.text,
                                                                             span.start)?,
                                                         span },
            TokenKind::Operator => match Operator::from_symbol(&token.text) {
                Some(op) => WeightedToken::Operator { op, span },
                None if token.text == "(" => {
                    return Err(ParseError::UnresolvedGroup { position: span.start }.into());
                },
                None => {
                    return Err(ParseError::UnmatchedClosingParen { position: span.start }.into());
                },
            },
            TokenKind::Unknown => {
                let character = tokenizer.source()[token.span.clone()].chars()
                                                                      .next()
                                                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnknownCharacter { character,
                                                        position: span.start }.into());
            },
        };

        tokens.push(weighted);
        tokenizer.advance();
    }

    Ok(tokens)
}
