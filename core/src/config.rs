//! Parser configuration.
//!
//! Defines the serializable record that controls token matching (case
//! folding, prefix style, list separator) and which sections of help/version
//! output are rendered. A default-constructed [`ParserConfig`] gives
//! case-sensitive Unix-style matching with `|` as the list separator and all
//! help sections enabled.

use serde::{Deserialize, Serialize};

/// Prefix convention for option tokens.
///
/// Determines the characters expected before short and long names when
/// tokens are matched and when help output is rendered.
///
/// # Examples
///
/// ```
/// use argmatch_core::PrefixStyle;
///
/// assert_eq!(PrefixStyle::Unix.long_prefix(), "--");
/// assert_eq!(PrefixStyle::Unix.short_prefix(), "-");
/// assert_eq!(PrefixStyle::Windows.long_prefix(), "/");
/// assert_eq!(PrefixStyle::Windows.short_prefix(), "/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PrefixStyle {
    /// `-x` short options and `--xyz` long options (the default).
    #[default]
    Unix,
    /// `/x` and `/xyz`, slash for both forms.
    Windows,
}

impl PrefixStyle {
    /// Returns the prefix expected before long names.
    pub fn long_prefix(&self) -> &'static str {
        match self {
            PrefixStyle::Unix => "--",
            PrefixStyle::Windows => "/",
        }
    }

    /// Returns the prefix expected before short names.
    pub fn short_prefix(&self) -> &'static str {
        match self {
            PrefixStyle::Unix => "-",
            PrefixStyle::Windows => "/",
        }
    }
}

/// Toggles for the individual sections of rendered help output.
///
/// All sections default to enabled; a section is also skipped when the
/// corresponding [`AppInfo`](crate::AppInfo) field is unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpSections {
    /// Show the free-form header text.
    pub header: bool,
    /// Show the application name.
    pub app_name: bool,
    /// Show the version line.
    pub version: bool,
    /// Show the free-form footer text.
    pub footer: bool,
    /// Show the license text.
    pub license: bool,
}

impl Default for HelpSections {
    fn default() -> Self {
        Self {
            header: true,
            app_name: true,
            version: true,
            footer: true,
            license: true,
        }
    }
}

/// Configuration for an [`OptionParser`](crate::OptionParser).
///
/// # Examples
///
/// ```
/// use argmatch_core::{ParserConfig, PrefixStyle};
///
/// let config = ParserConfig::default();
/// assert!(!config.case_insensitive);
/// assert_eq!(config.prefix_style, PrefixStyle::Unix);
/// assert_eq!(config.list_separator, '|');
///
/// let config = ParserConfig::default()
///     .ignore_case()
///     .with_list_separator(',');
/// assert!(config.case_insensitive);
/// assert_eq!(config.list_separator, ',');
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Fold ASCII case when matching tokens against option names.
    pub case_insensitive: bool,
    /// Prefix convention for option tokens.
    pub prefix_style: PrefixStyle,
    /// Separator for list-arity values.
    pub list_separator: char,
    /// Which help sections are rendered.
    pub help_sections: HelpSections,
    /// Append the version footer to version output.
    pub version_footer: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            prefix_style: PrefixStyle::default(),
            list_separator: '|',
            help_sections: HelpSections::default(),
            version_footer: false,
        }
    }
}

impl ParserConfig {
    /// Enables case-insensitive token matching.
    pub fn ignore_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Switches to Windows-style `/` prefixes.
    pub fn windows_style(mut self) -> Self {
        self.prefix_style = PrefixStyle::Windows;
        self
    }

    /// Sets the separator for list-arity values.
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.list_separator = separator;
        self
    }

    /// Sets the help section toggles.
    pub fn with_help_sections(mut self, sections: HelpSections) -> Self {
        self.help_sections = sections;
        self
    }

    /// Enables the version footer in version output.
    pub fn with_version_footer(mut self) -> Self {
        self.version_footer = true;
        self
    }
}
