//! Declarative command-line option matching and value extraction.
//!
//! This crate parses a process's argument vector against a declarative table
//! of option definitions:
//!
//! - [`OptionSpec`] — one recognizable option: short/long names, value
//!   [`arity`](ValueArity), default value, and help/version/hidden markers.
//! - [`ParserConfig`] — matching behavior (case folding, [`PrefixStyle`],
//!   list separator) and presentation toggles ([`HelpSections`]).
//! - [`OptionParser`] — validates the table, scans argument vectors, and
//!   answers queries ([`has_option`](OptionParser::has_option),
//!   [`value_of`](OptionParser::value_of),
//!   [`values_of`](OptionParser::values_of)) against the stored result.
//!
//! Validation ([`validate_specs`]) catches nameless specs, malformed names,
//! and duplicates before a table is installed. Coercion helpers
//! ([`to_boolean`], [`to_integer`], [`to_float`], [`split_list`]) turn
//! extracted string values into typed ones, and [`render_help`] /
//! [`render_version`] build the text for the two terminal outcomes.
//!
//! # Example
//!
//! ```
//! use argmatch_core::*;
//!
//! let specs = vec![
//!     OptionSpec::help(Some("h"), Some("help")).with_description("Print help"),
//!     OptionSpec::flag(Some("v"), Some("verbose")).with_description("Verbose output"),
//!     OptionSpec::with_value(Some("o"), Some("output"))
//!         .with_default("out.txt")
//!         .with_description("Output file"),
//! ];
//! let mut parser = OptionParser::new(specs, ParserConfig::default()).unwrap();
//!
//! let args: Vec<String> = ["prog", "-v", "--output", "report.txt"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! match parser.parse(&args).unwrap() {
//!     ParseOutcome::Parsed => {
//!         assert!(parser.has_option("verbose"));
//!         assert_eq!(parser.value_of("o"), "report.txt");
//!     }
//!     ParseOutcome::HelpRequested | ParseOutcome::VersionRequested => unreachable!(),
//! }
//! ```

mod config;
mod convert;
mod help;
mod parser;
mod types;
mod validate;

pub use config::{HelpSections, ParserConfig, PrefixStyle};
pub use convert::{ConversionError, split_list, to_boolean, to_float, to_integer};
pub use help::{AppInfo, render_help, render_version};
pub use parser::{OptionParser, ParseError, ParseOutcome};
pub use types::{OptionSpec, ParsedOption, ValueArity};
pub use validate::{ConfigError, validate_specs};
