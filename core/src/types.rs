//! Option table type definitions.
//!
//! This module defines the declarative data model for command-line options.
//! An option table is a plain `Vec<OptionSpec>`; the types derive [`serde`]
//! traits so tables can round-trip through JSON or be embedded in
//! configuration files.
//!
//! Option names are stored *bare* (e.g., `"v"` and `"verbose"`, never `"-v"`
//! or `"--verbose"`): the prefix characters are supplied by the active
//! [`PrefixStyle`](crate::PrefixStyle) when tokens are matched, so the same
//! table works under Unix and Windows prefix conventions.

use serde::{Deserialize, Serialize};

/// How many values an option consumes from the argument vector.
///
/// # Examples
///
/// ```
/// use argmatch_core::ValueArity;
///
/// let arity = ValueArity::default();
/// assert_eq!(arity, ValueArity::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueArity {
    /// A pure flag; the following token is never consumed.
    #[default]
    None,
    /// Consumes the next token as a single value.
    Single,
    /// Consumes the next token and splits it on the configured separator.
    List,
}

/// Declarative definition of one recognizable command-line option.
///
/// A spec has an optional short name and/or long name (at least one must be
/// present), an [`arity`](ValueArity) describing value consumption, an
/// optional default value, and markers for the terminal help/version flags.
///
/// Use the constructor methods [`flag`](OptionSpec::flag),
/// [`with_value`](OptionSpec::with_value), and
/// [`with_list`](OptionSpec::with_list) to create specs, then chain builder
/// methods like [`with_description`](OptionSpec::with_description) and
/// [`with_default`](OptionSpec::with_default).
///
/// # Examples
///
/// ```
/// use argmatch_core::{OptionSpec, ValueArity};
///
/// // Pure flag
/// let verbose = OptionSpec::flag(Some("v"), Some("verbose"))
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.arity, ValueArity::None);
/// assert_eq!(verbose.canonical_name(), "verbose");
///
/// // Option that consumes one value, with a fallback default
/// let output = OptionSpec::with_value(Some("o"), Some("output"))
///     .with_default("out.txt");
/// assert_eq!(output.arity, ValueArity::Single);
/// assert_eq!(output.default_value.as_deref(), Some("out.txt"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short name without prefix (e.g., "v")
    pub short: Option<String>,
    /// Long name without prefix (e.g., "verbose")
    pub long: Option<String>,
    /// How many values this option consumes
    pub arity: ValueArity,
    /// Fallback value when the option is absent or trailing without a value
    pub default_value: Option<String>,
    /// Description shown in help output
    pub description: Option<String>,
    /// Matching this option ends the scan with a help outcome
    pub help_flag: bool,
    /// Matching this option ends the scan with a version outcome
    pub version_flag: bool,
    /// Excluded from help output
    pub hidden: bool,
}

impl OptionSpec {
    /// Creates a pure flag (consumes no value).
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some("v"), Some("verbose"));
    /// assert!(flag.matches("v"));
    /// assert!(flag.matches("verbose"));
    /// assert!(!flag.help_flag);
    /// ```
    pub fn flag(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            short: short.map(String::from),
            long: long.map(String::from),
            arity: ValueArity::None,
            default_value: None,
            description: None,
            help_flag: false,
            version_flag: false,
            hidden: false,
        }
    }

    /// Creates an option that consumes the next token as its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::{OptionSpec, ValueArity};
    ///
    /// let opt = OptionSpec::with_value(Some("o"), Some("output"));
    /// assert_eq!(opt.arity, ValueArity::Single);
    /// ```
    pub fn with_value(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            arity: ValueArity::Single,
            ..Self::flag(short, long)
        }
    }

    /// Creates an option that consumes the next token as a separated list.
    ///
    /// The list separator is configured on
    /// [`ParserConfig`](crate::ParserConfig), not on the spec.
    pub fn with_list(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            arity: ValueArity::List,
            ..Self::flag(short, long)
        }
    }

    /// Creates the help flag. Matching it ends the scan immediately with
    /// a help outcome.
    pub fn help(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            help_flag: true,
            ..Self::flag(short, long)
        }
    }

    /// Creates the version flag. Matching it ends the scan immediately with
    /// a version outcome.
    pub fn version(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            version_flag: true,
            ..Self::flag(short, long)
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a default value, used when the option does not appear or appears
    /// as the final token with no value to consume.
    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Excludes this spec from help output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::OptionSpec;
    ///
    /// let spec = OptionSpec::flag(Some("v"), Some("verbose"));
    /// assert_eq!(spec.canonical_name(), "verbose");
    ///
    /// let short_only = OptionSpec::flag(Some("v"), None);
    /// assert_eq!(short_only.canonical_name(), "v");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }

    /// Checks if this spec matches a bare name (short or long form).
    ///
    /// The comparison is exact; case folding applies only when tokens are
    /// matched during a parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::OptionSpec;
    ///
    /// let spec = OptionSpec::flag(Some("v"), Some("verbose"));
    /// assert!(spec.matches("v"));
    /// assert!(spec.matches("verbose"));
    /// assert!(!spec.matches("x"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        self.short.as_deref() == Some(name) || self.long.as_deref() == Some(name)
    }
}

/// One matched option in a parse result.
///
/// Carries the identity pair of the spec that matched (unfolded, exactly as
/// defined in the table) and the values extracted for it. An option that
/// appears several times in the argument vector produces several entries.
///
/// # Examples
///
/// ```
/// use argmatch_core::{OptionSpec, ParsedOption};
///
/// let spec = OptionSpec::with_value(Some("o"), Some("output"));
/// let parsed = ParsedOption::new(&spec, vec!["file.txt".into()]);
/// assert!(parsed.matches("o"));
/// assert_eq!(parsed.values, vec!["file.txt".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ParsedOption {
    /// Short name of the matched spec
    pub short: Option<String>,
    /// Long name of the matched spec
    pub long: Option<String>,
    /// Extracted values (empty for pure flags)
    pub values: Vec<String>,
}

impl ParsedOption {
    /// Creates a parsed entry for a spec with the given extracted values.
    pub fn new(spec: &OptionSpec, values: Vec<String>) -> Self {
        Self {
            short: spec.short.clone(),
            long: spec.long.clone(),
            values,
        }
    }

    /// Checks if this entry matches a bare name (short or long form).
    pub fn matches(&self, name: &str) -> bool {
        self.short.as_deref() == Some(name) || self.long.as_deref() == Some(name)
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }
}
