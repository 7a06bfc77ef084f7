use std::ops::Range;

use crate::error::ParseError;

/// A parenthesized group located inside an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    /// The text between the parentheses.
    pub inner: &'a str,
    /// Byte range of the whole group, parentheses included.
    pub span:  Range<usize>,
}

/// Finds the first complete parenthesized group in `expression`.
///
/// Everything before the first `(` is ignored. From there a nesting counter
/// is kept, and the group ends where the counter first returns to zero. The
/// result is therefore the first group reached from the left, with any nested
/// groups still inside it; later sibling groups are only found once the
/// earlier ones have been resolved.
///
/// Returns `Ok(None)` when the expression has no `(`.
///
/// # Errors
/// Returns [`ParseError::UnclosedParen`] if the first `(` is never closed.
///
/// # Example
/// ```
/// use flatcalc::interpreter::grouping::find_group;
///
/// let group = find_group("(2+(7+90/(1+1))) * (2 /2) + 76").unwrap().unwrap();
/// assert_eq!(group.inner, "2+(7+90/(1+1))");
/// assert_eq!(group.span, 0..16);
///
/// assert!(find_group("1+1").unwrap().is_none());
/// assert!(find_group("(1+1").is_err());
/// ```
pub fn find_group(expression: &str) -> Result<Option<Group<'_>>, ParseError> {
    let Some(span) = scan_group(expression, 0..expression.len())? else {
        return Ok(None);
    };
    let inner = &expression[span.start + 1..span.end - 1];

    Ok(Some(Group { inner, span }))
}

/// Locates the first complete group of `expression` within `range`.
///
/// Returned spans and error positions are absolute offsets into
/// `expression`, which lets the evaluator resolve groups of a nested slice
/// without copying it.
pub(in crate::interpreter) fn scan_group(expression: &str,
                                         range: Range<usize>)
                                         -> Result<Option<Range<usize>>, ParseError> {
    let mut open = None;
    let mut depth = 0usize;

    for (offset, c) in expression[range.clone()].char_indices() {
        let position = range.start + offset;
        match c {
            '(' => {
                open.get_or_insert(position);
                depth += 1;
            },
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0
                   && let Some(start) = open
                {
                    return Ok(Some(start..position + 1));
                }
            },
            _ => {},
        }
    }

    match open {
        Some(position) => Err(ParseError::UnclosedParen { position }),
        None => Ok(None),
    }
}
