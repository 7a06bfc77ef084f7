use crate::error::ParseError;

/// Removes every whitespace character from an expression.
///
/// Whitespace is insignificant in the language, so `"1 2"` becomes `"12"`.
/// All reported error positions are offsets into the returned string.
///
/// ## Example
/// ```
/// use flatcalc::util::num::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 8 /\t2 "), "8/2");
/// ```
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses a number literal produced by the tokenizer.
///
/// The tokenizer accepts any run of digits and dots, so malformed literals
/// such as `1.2.3` are only rejected here. Parsing never depends on the
/// current locale: `.` is always the decimal separator.
///
/// ## Errors
/// Returns [`ParseError::InvalidNumber`] if the text is not a decimal number.
///
/// ## Example
/// ```
/// use flatcalc::util::num::parse_number;
///
/// assert_eq!(parse_number("6345.1234", 0).unwrap(), 6345.1234);
/// assert!(parse_number("1.2.3", 0).is_err());
/// ```
pub fn parse_number(text: &str, position: usize) -> Result<f64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber { text: text.to_string(),
                                                          position })
}

/// Formats a value with `.` as the decimal separator.
///
/// Integral values print without a fractional part, non-finite values print
/// as `inf`, `-inf` and `NaN`.
///
/// ## Example
/// ```
/// use flatcalc::util::num::format_number;
///
/// assert_eq!(format_number(10.5), "10.5");
/// assert_eq!(format_number(9.0), "9");
/// assert_eq!(format_number(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}
