//! Typed coercion of extracted option values.
//!
//! Parsed values are plain strings; these helpers convert them into booleans,
//! integers, floats, and lists. They are pure functions with no connection to
//! the parse loop, so a coercion failure never invalidates a parse result —
//! the caller decides the fallback.
//!
//! # Examples
//!
//! ```
//! use argmatch_core::{to_boolean, to_integer, split_list};
//!
//! assert!(to_boolean("Yes"));
//! assert_eq!(to_integer("42").unwrap(), 42);
//! assert_eq!(split_list("a,b,c", ','), vec!["a", "b", "c"]);
//! ```

use thiserror::Error;

/// Value coercion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is not a valid integer or is out of range.
    #[error("not an integer: {0:?}")]
    InvalidInteger(String),
    /// The value is not a valid floating-point number or is out of range.
    #[error("not a number: {0:?}")]
    InvalidFloat(String),
}

/// Interprets a value as a boolean.
///
/// Returns `true` for `"true"`, `"1"`, `"yes"`, and `"on"` (any ASCII case),
/// and `false` for everything else.
///
/// # Examples
///
/// ```
/// use argmatch_core::to_boolean;
///
/// assert!(to_boolean("true"));
/// assert!(to_boolean("ON"));
/// assert!(to_boolean("1"));
/// assert!(!to_boolean("0"));
/// assert!(!to_boolean(""));
/// ```
pub fn to_boolean(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Parses a value as a signed integer.
///
/// Surrounding whitespace is trimmed; the remainder must be a complete
/// integer literal.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidInteger`] if the value is not a valid
/// integer or does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use argmatch_core::to_integer;
///
/// assert_eq!(to_integer("42").unwrap(), 42);
/// assert_eq!(to_integer(" -7 ").unwrap(), -7);
/// assert!(to_integer("42x").is_err());
/// ```
pub fn to_integer(value: &str) -> Result<i64, ConversionError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidInteger(value.to_string()))
}

/// Parses a value as a floating-point number.
///
/// Surrounding whitespace is trimmed. The literal spellings `inf` and
/// `infinity` (optionally signed, any ASCII case) are accepted; a finite
/// literal too large for an `f64` is an error, not infinity.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidFloat`] if the value is not a valid
/// float literal or does not fit in an `f64`.
///
/// # Examples
///
/// ```
/// use argmatch_core::to_float;
///
/// assert_eq!(to_float("2.5").unwrap(), 2.5);
/// assert!(to_float("two").is_err());
/// assert!(to_float("1e999").is_err());
/// ```
pub fn to_float(value: &str) -> Result<f64, ConversionError> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidFloat(value.to_string()))?;
    if parsed.is_infinite() && !is_infinity_literal(trimmed) {
        return Err(ConversionError::InvalidFloat(value.to_string()));
    }
    Ok(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let bare = value.strip_prefix(['+', '-']).unwrap_or(value);
    bare.eq_ignore_ascii_case("inf") || bare.eq_ignore_ascii_case("infinity")
}

/// Splits a value on every occurrence of `separator`.
///
/// Empty fields are preserved, and the result always has at least one
/// element: a value without the separator yields itself, and the empty
/// string yields one empty element.
///
/// # Examples
///
/// ```
/// use argmatch_core::split_list;
///
/// assert_eq!(split_list("a,b,c", ','), vec!["a", "b", "c"]);
/// assert_eq!(split_list("a||b", '|'), vec!["a", "", "b"]);
/// assert_eq!(split_list("single", ','), vec!["single"]);
/// assert_eq!(split_list("", ','), vec![""]);
/// ```
pub fn split_list(value: &str, separator: char) -> Vec<String> {
    value.split(separator).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_boolean_truthy_set() {
        assert!(to_boolean("true"));
        assert!(to_boolean("1"));
        assert!(to_boolean("yes"));
        assert!(to_boolean("on"));
    }

    #[test]
    fn test_to_boolean_folds_case() {
        assert!(to_boolean("True"));
        assert!(to_boolean("YES"));
        assert!(to_boolean("On"));
    }

    #[test]
    fn test_to_boolean_everything_else_is_false() {
        assert!(!to_boolean("false"));
        assert!(!to_boolean("0"));
        assert!(!to_boolean("off"));
        assert!(!to_boolean("y"));
        assert!(!to_boolean(""));
    }

    #[test]
    fn test_to_integer_parses_and_trims() {
        assert_eq!(to_integer("42"), Ok(42));
        assert_eq!(to_integer("-17"), Ok(-17));
        assert_eq!(to_integer("  8  "), Ok(8));
    }

    #[test]
    fn test_to_integer_rejects_garbage() {
        assert_eq!(
            to_integer("42x"),
            Err(ConversionError::InvalidInteger("42x".to_string()))
        );
        assert!(to_integer("").is_err());
        assert!(to_integer("3.5").is_err());
        // Out of range for i64
        assert!(to_integer("99999999999999999999").is_err());
    }

    #[test]
    fn test_to_float_parses() {
        assert_eq!(to_float("2.5"), Ok(2.5));
        assert_eq!(to_float("-0.125"), Ok(-0.125));
        assert_eq!(to_float("3"), Ok(3.0));
    }

    #[test]
    fn test_to_float_rejects_garbage() {
        assert_eq!(
            to_float("two"),
            Err(ConversionError::InvalidFloat("two".to_string()))
        );
        assert!(to_float("").is_err());
    }

    #[test]
    fn test_to_float_rejects_out_of_range() {
        // Out of range for f64
        assert_eq!(
            to_float("1e999"),
            Err(ConversionError::InvalidFloat("1e999".to_string()))
        );
        assert!(to_float("-1e999").is_err());
        // Spelled-out infinities still parse.
        assert_eq!(to_float("inf"), Ok(f64::INFINITY));
        assert_eq!(to_float("+Infinity"), Ok(f64::INFINITY));
        assert_eq!(to_float("-inf"), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn test_split_list_preserves_empty_fields() {
        assert_eq!(split_list("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_list("a,,c", ','), vec!["a", "", "c"]);
        assert_eq!(split_list(",a,", ','), vec!["", "a", ""]);
    }

    #[test]
    fn test_split_list_always_yields_one_element() {
        assert_eq!(split_list("single", ','), vec!["single"]);
        assert_eq!(split_list("", ','), vec![""]);
    }
}
