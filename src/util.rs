/// Numeric and text helpers.
///
/// This module provides the locale-independent conversions between number
/// literals and `f64`, plus the whitespace normalization every stage of the
/// pipeline relies on.
pub mod num;
