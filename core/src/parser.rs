//! Token scanning, option matching, and value extraction.
//!
//! [`OptionParser`] owns a validated option table, a [`ParserConfig`], and
//! the result of the most recent scan. Parsing walks the argument vector
//! once, matching each token against the table and consuming value tokens
//! according to each spec's arity. Query methods then answer questions
//! against the stored result, falling back to spec defaults for options that
//! never appeared.
//!
//! # Examples
//!
//! ```
//! use argmatch_core::*;
//!
//! let specs = vec![
//!     OptionSpec::flag(Some("v"), Some("verbose")),
//!     OptionSpec::with_value(Some("o"), Some("output")).with_default("out.txt"),
//! ];
//! let mut parser = OptionParser::new(specs, ParserConfig::default()).unwrap();
//!
//! let args: Vec<String> = ["prog", "-v", "--output", "report.txt"]
//!     .iter().map(|s| s.to_string()).collect();
//! let outcome = parser.parse(&args).unwrap();
//!
//! assert_eq!(outcome, ParseOutcome::Parsed);
//! assert!(parser.has_option("verbose"));
//! assert_eq!(parser.value_of("o"), "report.txt");
//! ```

use thiserror::Error;
use tracing::debug;

use crate::convert::split_list;
use crate::validate::{ConfigError, validate_specs};
use crate::{OptionSpec, ParsedOption, ParserConfig, ValueArity};

/// How a successful scan ended.
///
/// The help and version outcomes are terminal: scanning stops at the
/// matching token and any partially built result is discarded, so the
/// caller can render text and exit without worrying about stale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole vector was scanned; the result is stored and queryable.
    Parsed,
    /// A help flag was matched; the caller should render help output.
    HelpRequested,
    /// A version flag was matched; the caller should render version output.
    VersionRequested,
}

/// Scan failures.
///
/// Both variants carry the offending token exactly as it was typed,
/// including its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token looked like an option but matched no spec.
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// An option that consumes a value was the final token and its spec has
    /// no default to fall back on.
    #[error("missing value for option: {0}")]
    MissingValue(String),
}

/// Matches command-line tokens against a declarative option table.
///
/// The parser exclusively owns its table and its last scan result; queries
/// hand out references or owned copies. Parsing takes `&mut self`, so one
/// instance cannot be driven from two threads at once — use separate
/// instances for concurrent work.
///
/// # Examples
///
/// ```
/// use argmatch_core::*;
///
/// let specs = vec![
///     OptionSpec::help(Some("h"), Some("help")),
///     OptionSpec::with_list(Some("l"), Some("list")),
/// ];
/// let config = ParserConfig::default().with_list_separator(',');
/// let mut parser = OptionParser::new(specs, config).unwrap();
///
/// let args: Vec<String> = ["prog", "-l", "a,b,c"].iter().map(|s| s.to_string()).collect();
/// parser.parse(&args).unwrap();
/// assert_eq!(parser.values_of("list"), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionParser {
    specs: Vec<OptionSpec>,
    config: ParserConfig,
    parsed: Vec<ParsedOption>,
}

impl OptionParser {
    /// Creates a parser with the given option table and configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] if the table is structurally
    /// invalid (see [`validate_specs`]).
    pub fn new(specs: Vec<OptionSpec>, config: ParserConfig) -> Result<Self, ConfigError> {
        let mut parser = Self::default();
        parser.configure(specs, config)?;
        Ok(parser)
    }

    /// Replaces the option table and configuration.
    ///
    /// Any stored scan result is cleared. On error the parser keeps its
    /// previous table, configuration, and result untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] if the new table is structurally
    /// invalid; nothing is replaced in that case.
    pub fn configure(
        &mut self,
        specs: Vec<OptionSpec>,
        config: ParserConfig,
    ) -> Result<(), ConfigError> {
        if let Some(error) = validate_specs(&specs, &config).into_iter().next() {
            return Err(error);
        }
        self.specs = specs;
        self.config = config;
        self.parsed.clear();
        Ok(())
    }

    /// Scans an argument vector against the option table.
    ///
    /// The token at index 0 is the program name and is always skipped. Each
    /// remaining token is compared against every spec in table order (long
    /// name first, then short, each spelled with the configured prefix); the
    /// first match wins, so an earlier spec deliberately shadows a later one
    /// wherever both could match. Matching a help or version spec ends the
    /// scan immediately with the corresponding terminal outcome.
    ///
    /// For `Single` and `List` arities the token that follows is consumed as
    /// the value — whatever it looks like — and split on the configured
    /// separator for lists. When no token follows, the spec's default value
    /// is used instead.
    ///
    /// On success the result replaces the previous one; on any error or
    /// terminal outcome the stored result is left empty.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownOption`] for a token that starts with a
    ///   configured prefix but matches no spec. Tokens without a prefix are
    ///   ignored.
    /// - [`ParseError::MissingValue`] for a trailing value-consuming option
    ///   whose spec has no default.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::*;
    ///
    /// let specs = vec![OptionSpec::flag(Some("v"), Some("verbose"))];
    /// let mut parser = OptionParser::new(specs, ParserConfig::default()).unwrap();
    ///
    /// let args: Vec<String> = ["prog", "--bogus"].iter().map(|s| s.to_string()).collect();
    /// let err = parser.parse(&args).unwrap_err();
    /// assert_eq!(err, ParseError::UnknownOption("--bogus".to_string()));
    /// ```
    pub fn parse(&mut self, args: &[String]) -> Result<ParseOutcome, ParseError> {
        self.parsed.clear();
        debug!(tokens = args.len().saturating_sub(1), "Scanning argument vector");

        let mut matched: Vec<ParsedOption> = Vec::new();
        let mut index = 1;
        while index < args.len() {
            let token = &args[index];

            match self.find_spec(token) {
                Some(position) => {
                    let spec = &self.specs[position];
                    if spec.help_flag {
                        debug!(token = %token, "Help flag matched, ending scan");
                        return Ok(ParseOutcome::HelpRequested);
                    }
                    if spec.version_flag {
                        debug!(token = %token, "Version flag matched, ending scan");
                        return Ok(ParseOutcome::VersionRequested);
                    }

                    let values = match spec.arity {
                        ValueArity::None => Vec::new(),
                        ValueArity::Single => {
                            let value = if index + 1 < args.len() {
                                index += 1;
                                args[index].clone()
                            } else if let Some(default) = &spec.default_value {
                                default.clone()
                            } else {
                                return Err(ParseError::MissingValue(token.clone()));
                            };
                            vec![value]
                        }
                        ValueArity::List => {
                            let raw = if index + 1 < args.len() {
                                index += 1;
                                args[index].clone()
                            } else if let Some(default) = &spec.default_value {
                                default.clone()
                            } else {
                                return Err(ParseError::MissingValue(token.clone()));
                            };
                            split_list(&raw, self.config.list_separator)
                        }
                    };
                    matched.push(ParsedOption::new(spec, values));
                }
                None => {
                    if self.looks_like_option(token) {
                        return Err(ParseError::UnknownOption(token.clone()));
                    }
                }
            }
            index += 1;
        }

        debug!(matched = matched.len(), "Scan complete");
        self.parsed = matched;
        Ok(ParseOutcome::Parsed)
    }

    /// Returns `true` if the last scan matched an option with the given
    /// bare name (short or long form, exact comparison).
    pub fn has_option(&self, name: &str) -> bool {
        self.parsed.iter().any(|parsed| parsed.matches(name))
    }

    /// Returns the first extracted value for the named option.
    ///
    /// Falls back to the spec's default value when the option was not
    /// matched (or matched without values), and to `""` when the spec has no
    /// default or the name is unknown. The fallback applies even before any
    /// scan, so defaults are readable from a freshly configured parser.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::*;
    ///
    /// let specs = vec![OptionSpec::with_value(Some("o"), Some("output")).with_default("out.txt")];
    /// let parser = OptionParser::new(specs, ParserConfig::default()).unwrap();
    ///
    /// // Never parsed: the default is already visible.
    /// assert_eq!(parser.value_of("output"), "out.txt");
    /// assert_eq!(parser.value_of("nope"), "");
    /// ```
    pub fn value_of(&self, name: &str) -> &str {
        for parsed in &self.parsed {
            if parsed.matches(name) {
                if let Some(first) = parsed.values.first() {
                    return first;
                }
            }
        }
        for spec in &self.specs {
            if spec.matches(name) {
                return spec.default_value.as_deref().unwrap_or("");
            }
        }
        ""
    }

    /// Returns all extracted values for the named option.
    ///
    /// The first matching entry of the last scan wins. When the option was
    /// not matched, the spec's default is substituted: split on the list
    /// separator for `List` specs, as a single element otherwise. A spec
    /// without a default, or an unknown name, yields an empty vector.
    pub fn values_of(&self, name: &str) -> Vec<String> {
        for parsed in &self.parsed {
            if parsed.matches(name) {
                return parsed.values.clone();
            }
        }
        for spec in &self.specs {
            if spec.matches(name) {
                return match &spec.default_value {
                    Some(default) if spec.arity == ValueArity::List => {
                        split_list(default, self.config.list_separator)
                    }
                    Some(default) => vec![default.clone()],
                    None => Vec::new(),
                };
            }
        }
        Vec::new()
    }

    /// Returns the option table.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the entries of the last successful scan, in match order.
    pub fn parsed_options(&self) -> &[ParsedOption] {
        &self.parsed
    }

    /// Position of the first spec matching the token, long form checked
    /// before short.
    fn find_spec(&self, token: &str) -> Option<usize> {
        self.specs.iter().position(|spec| {
            if let Some(long) = &spec.long {
                if let Some(name) = token.strip_prefix(self.config.prefix_style.long_prefix()) {
                    if self.names_equal(name, long) {
                        return true;
                    }
                }
            }
            if let Some(short) = &spec.short {
                if let Some(name) = token.strip_prefix(self.config.prefix_style.short_prefix()) {
                    if self.names_equal(name, short) {
                        return true;
                    }
                }
            }
            false
        })
    }

    fn names_equal(&self, a: &str, b: &str) -> bool {
        if self.config.case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }

    fn looks_like_option(&self, token: &str) -> bool {
        token.starts_with(self.config.prefix_style.long_prefix())
            || token.starts_with(self.config.prefix_style.short_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn sample_parser() -> OptionParser {
        let specs = vec![
            OptionSpec::help(None, Some("help")),
            OptionSpec::version(Some("V"), None),
            OptionSpec::flag(Some("v"), Some("verbose")),
            OptionSpec::with_value(Some("o"), Some("output")).with_default("out.txt"),
            OptionSpec::with_list(Some("l"), Some("list")),
        ];
        OptionParser::new(specs, ParserConfig::default().with_list_separator(',')).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_table() {
        let specs = vec![
            OptionSpec::flag(Some("v"), None),
            OptionSpec::flag(Some("v"), None),
        ];

        let result = OptionParser::new(specs, ParserConfig::default());
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateShort("v".to_string()));
    }

    #[test]
    fn test_parse_skips_program_name() {
        let mut parser = sample_parser();

        // "verbose" as args[0] is the program name, not an option token.
        let outcome = parser.parse(&args(&["--verbose"])).unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert!(!parser.has_option("verbose"));
    }

    #[test]
    fn test_parse_matches_long_and_short_forms() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "--verbose"])).unwrap();
        assert!(parser.has_option("v"));
        assert!(parser.has_option("verbose"));

        parser.parse(&args(&["prog", "-v"])).unwrap();
        assert!(parser.has_option("verbose"));
    }

    #[test]
    fn test_parse_extracts_single_value() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "--output", "report.txt"])).unwrap();
        assert_eq!(parser.value_of("o"), "report.txt");
        assert_eq!(parser.value_of("output"), "report.txt");
    }

    #[test]
    fn test_parse_consumes_value_token_blindly() {
        let mut parser = sample_parser();

        // The token after a value option is its value even if it looks like
        // an option itself.
        parser.parse(&args(&["prog", "-o", "--verbose"])).unwrap();
        assert_eq!(parser.value_of("o"), "--verbose");
        assert!(!parser.has_option("verbose"));
    }

    #[test]
    fn test_parse_splits_list_values() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "--list", "a,b,c"])).unwrap();
        assert_eq!(parser.values_of("l"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_flag_never_consumes_next_token() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "-v", "-o", "x"])).unwrap();
        assert!(parser.has_option("verbose"));
        assert_eq!(parser.value_of("output"), "x");
        assert!(parser.values_of("verbose").is_empty());
    }

    #[test]
    fn test_parse_trailing_option_falls_back_to_default() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "--output"])).unwrap();
        assert!(parser.has_option("output"));
        assert_eq!(parser.value_of("output"), "out.txt");
    }

    #[test]
    fn test_parse_trailing_option_without_default_fails() {
        let mut parser = sample_parser();

        let err = parser.parse(&args(&["prog", "--list"])).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("--list".to_string()));
    }

    #[test]
    fn test_parse_trailing_list_option_splits_default() {
        let specs = vec![OptionSpec::with_list(Some("l"), Some("list")).with_default("a,b")];
        let mut parser =
            OptionParser::new(specs, ParserConfig::default().with_list_separator(',')).unwrap();

        parser.parse(&args(&["prog", "--list"])).unwrap();
        assert_eq!(parser.values_of("list"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_unknown_option_fails() {
        let mut parser = sample_parser();

        let err = parser.parse(&args(&["prog", "--bogus"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--bogus".to_string()));
    }

    #[test]
    fn test_parse_ignores_bare_tokens() {
        let mut parser = sample_parser();

        let outcome = parser.parse(&args(&["prog", "input.txt", "other"])).unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert!(parser.parsed_options().is_empty());
    }

    #[test]
    fn test_parse_help_short_circuits() {
        let mut parser = sample_parser();

        // The unknown token after --help is never reached.
        let outcome = parser.parse(&args(&["prog", "--help", "--bogus"])).unwrap();
        assert_eq!(outcome, ParseOutcome::HelpRequested);
        assert!(parser.parsed_options().is_empty());
    }

    #[test]
    fn test_parse_version_short_circuits() {
        let mut parser = sample_parser();

        let outcome = parser.parse(&args(&["prog", "-V"])).unwrap();
        assert_eq!(outcome, ParseOutcome::VersionRequested);
    }

    #[test]
    fn test_parse_error_discards_previous_result() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "-v"])).unwrap();
        assert!(parser.has_option("v"));

        parser.parse(&args(&["prog", "--bogus"])).unwrap_err();
        assert!(!parser.has_option("v"));
        assert!(parser.parsed_options().is_empty());
    }

    #[test]
    fn test_parse_repeated_option_keeps_every_entry() {
        let mut parser = sample_parser();

        parser.parse(&args(&["prog", "-o", "a.txt", "-o", "b.txt"])).unwrap();
        assert_eq!(parser.parsed_options().len(), 2);
        assert_eq!(parser.value_of("o"), "a.txt");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let specs = vec![OptionSpec::flag(Some("v"), Some("Verbose"))];
        let mut parser =
            OptionParser::new(specs.clone(), ParserConfig::default().ignore_case()).unwrap();

        parser.parse(&args(&["prog", "--verbose"])).unwrap();
        assert!(parser.has_option("Verbose"));

        // Exact matching rejects the folded spelling.
        let mut strict = OptionParser::new(specs, ParserConfig::default()).unwrap();
        let err = strict.parse(&args(&["prog", "--verbose"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--verbose".to_string()));
    }

    #[test]
    fn test_windows_prefix_style() {
        let specs = vec![
            OptionSpec::flag(Some("v"), Some("verbose")),
            OptionSpec::with_value(Some("o"), Some("output")),
        ];
        let mut parser =
            OptionParser::new(specs, ParserConfig::default().windows_style()).unwrap();

        parser.parse(&args(&["prog", "/verbose", "/o", "x.txt"])).unwrap();
        assert!(parser.has_option("verbose"));
        assert_eq!(parser.value_of("output"), "x.txt");

        // Unix-style tokens are not options under the Windows style.
        let outcome = parser.parse(&args(&["prog", "--verbose"])).unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert!(parser.parsed_options().is_empty());
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // Under the Windows style a short "x" and a long "x" both answer to
        // the token "/x"; the first spec in table order wins.
        let specs = vec![
            OptionSpec::flag(Some("x"), None).with_description("short form"),
            OptionSpec::flag(None, Some("x")).with_description("long form"),
        ];
        let mut parser =
            OptionParser::new(specs, ParserConfig::default().windows_style()).unwrap();

        parser.parse(&args(&["prog", "/x"])).unwrap();
        assert_eq!(parser.parsed_options().len(), 1);
        assert_eq!(parser.parsed_options()[0].short.as_deref(), Some("x"));
        assert!(parser.parsed_options()[0].long.is_none());
    }

    #[test]
    fn test_queries_before_any_parse() {
        let parser = sample_parser();

        assert!(!parser.has_option("verbose"));
        assert_eq!(parser.value_of("output"), "out.txt");
        assert_eq!(parser.values_of("output"), vec!["out.txt"]);
        assert!(parser.values_of("verbose").is_empty());
    }

    #[test]
    fn test_values_of_splits_list_default() {
        let specs = vec![
            OptionSpec::with_list(Some("l"), Some("list")).with_default("a,b"),
        ];
        let parser =
            OptionParser::new(specs, ParserConfig::default().with_list_separator(',')).unwrap();

        assert_eq!(parser.values_of("list"), vec!["a", "b"]);
    }

    #[test]
    fn test_configure_replaces_table_and_clears_result() {
        let mut parser = sample_parser();
        parser.parse(&args(&["prog", "-v"])).unwrap();
        assert!(parser.has_option("v"));

        parser
            .configure(
                vec![OptionSpec::flag(Some("q"), Some("quiet"))],
                ParserConfig::default(),
            )
            .unwrap();
        assert!(!parser.has_option("v"));
        assert_eq!(parser.specs().len(), 1);
    }

    #[test]
    fn test_configure_keeps_state_on_invalid_table() {
        let mut parser = sample_parser();
        parser.parse(&args(&["prog", "-v"])).unwrap();

        let result = parser.configure(vec![OptionSpec::flag(None, None)], ParserConfig::default());
        assert!(result.is_err());
        assert_eq!(parser.specs().len(), 5);
        assert!(parser.has_option("v"));
    }

    #[test]
    fn test_parse_empty_args() {
        let mut parser = sample_parser();

        let outcome = parser.parse(&[]).unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert!(parser.parsed_options().is_empty());
    }
}
