//! Option table validation.
//!
//! Validates structural invariants of an option table before it is installed
//! in a parser, catching nameless specs, malformed names, and duplicate
//! names. Without this check a duplicate name would be silently shadowed,
//! since token matching always takes the first spec in table order.
//!
//! # Examples
//!
//! ```
//! use argmatch_core::*;
//!
//! let specs = vec![
//!     OptionSpec::flag(Some("v"), Some("verbose")),
//!     OptionSpec::with_value(Some("o"), Some("output")),
//! ];
//! assert!(validate_specs(&specs, &ParserConfig::default()).is_empty());
//!
//! // Invalid: name written with its prefix
//! let bad = vec![OptionSpec::flag(Some("-v"), None)];
//! assert!(!validate_specs(&bad, &ParserConfig::default()).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{OptionSpec, ParserConfig};

/// Option table validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A spec has neither a short nor a long name.
    #[error("option must define a short or long name")]
    MissingName,
    /// Short name is empty, starts with a prefix character, or contains
    /// whitespace. Names are stored bare (e.g., `"v"`, not `"-v"`).
    #[error("invalid short name: {0:?}")]
    InvalidShortName(String),
    /// Long name is empty, starts with a prefix character, or contains
    /// whitespace.
    #[error("invalid long name: {0:?}")]
    InvalidLongName(String),
    /// Two specs in the table share a short name.
    #[error("duplicate short name: {0}")]
    DuplicateShort(String),
    /// Two specs in the table share a long name.
    #[error("duplicate long name: {0}")]
    DuplicateLong(String),
}

/// Validates an option table against a parser configuration.
///
/// Checks that every spec has at least one name, that names are bare and
/// free of whitespace, and that no two specs share a short or long name.
/// Short and long names live in separate namespaces, so a short `"x"` and a
/// long `"x"` may coexist. When the configuration is case-insensitive, names
/// differing only in ASCII case count as duplicates.
///
/// # Examples
///
/// ```
/// use argmatch_core::*;
///
/// let specs = vec![
///     OptionSpec::flag(Some("v"), Some("verbose")),
///     OptionSpec::flag(None, Some("Verbose")),
/// ];
///
/// // Distinct under exact matching...
/// assert!(validate_specs(&specs, &ParserConfig::default()).is_empty());
///
/// // ...but duplicates once case is folded.
/// let errors = validate_specs(&specs, &ParserConfig::default().ignore_case());
/// assert_eq!(errors, vec![ConfigError::DuplicateLong("verbose".to_string())]);
/// ```
pub fn validate_specs(specs: &[OptionSpec], config: &ParserConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let mut seen_short: HashSet<String> = HashSet::new();
    let mut seen_long: HashSet<String> = HashSet::new();

    for spec in specs {
        if spec.short.is_none() && spec.long.is_none() {
            errors.push(ConfigError::MissingName);
            return errors;
        }

        if let Some(short) = &spec.short {
            if !is_valid_name(short) {
                errors.push(ConfigError::InvalidShortName(short.clone()));
                return errors;
            }
            if !seen_short.insert(fold_name(short, config)) {
                errors.push(ConfigError::DuplicateShort(fold_name(short, config)));
                return errors;
            }
        }

        if let Some(long) = &spec.long {
            if !is_valid_name(long) {
                errors.push(ConfigError::InvalidLongName(long.clone()));
                return errors;
            }
            if !seen_long.insert(fold_name(long, config)) {
                errors.push(ConfigError::DuplicateLong(fold_name(long, config)));
                return errors;
            }
        }
    }

    errors
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.starts_with('/')
        && !name.contains(char::is_whitespace)
}

fn fold_name(name: &str, config: &ParserConfig) -> String {
    if config.case_insensitive {
        name.to_ascii_lowercase()
    } else {
        name.to_string()
    }
}
