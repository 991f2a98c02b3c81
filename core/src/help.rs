//! Help and version text rendering.
//!
//! Pure string builders for the two terminal outcomes: the library never
//! writes to the console itself. [`AppInfo`] carries the caller-supplied
//! presentation content (application name, version, header/footer/license
//! text); which sections actually appear is controlled by the
//! [`HelpSections`](crate::HelpSections) toggles and the `version_footer`
//! flag on [`ParserConfig`].
//!
//! # Examples
//!
//! ```
//! use argmatch_core::*;
//!
//! let specs = vec![
//!     OptionSpec::help(Some("h"), Some("help")).with_description("Print this help"),
//!     OptionSpec::with_value(Some("o"), Some("output")).with_description("Output file"),
//! ];
//! let info = AppInfo::new("mytool").with_semver(1, 0, 0);
//!
//! let help = render_help(&specs, &ParserConfig::default(), &info);
//! assert!(help.contains("mytool version 1.0.0"));
//! assert!(help.contains("-o, --output"));
//! ```

use serde::{Deserialize, Serialize};

use crate::{OptionSpec, ParserConfig};

/// Presentation content for help and version output.
///
/// Every field is optional; unset fields simply render nothing. Built with
/// [`new`](AppInfo::new) and the chainable setters.
///
/// # Examples
///
/// ```
/// use argmatch_core::AppInfo;
///
/// let info = AppInfo::new("mytool")
///     .with_semver(2, 1, 0)
///     .with_help_header("mytool - does the thing")
///     .with_license("MIT License");
/// assert_eq!(info.version.as_deref(), Some("2.1.0"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppInfo {
    /// Application name shown in help and version output.
    pub name: Option<String>,
    /// Version string (free-form; see [`with_semver`](AppInfo::with_semver)).
    pub version: Option<String>,
    /// Free-form text above everything else in help output.
    pub help_header: Option<String>,
    /// Free-form text below the option rows in help output.
    pub help_footer: Option<String>,
    /// Extra line appended to version output when enabled in the config.
    pub version_footer: Option<String>,
    /// License text, shown at the end of help and version output.
    pub license: Option<String>,
}

impl AppInfo {
    /// Creates presentation info with the given application name.
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Sets a free-form version string.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Sets the version from semver components.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::AppInfo;
    ///
    /// let info = AppInfo::new("tool").with_semver(1, 2, 3);
    /// assert_eq!(info.version.as_deref(), Some("1.2.3"));
    /// ```
    pub fn with_semver(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.version = Some(format!("{major}.{minor}.{patch}"));
        self
    }

    /// Sets the help header text.
    pub fn with_help_header(mut self, header: &str) -> Self {
        self.help_header = Some(header.to_string());
        self
    }

    /// Sets the help footer text.
    pub fn with_help_footer(mut self, footer: &str) -> Self {
        self.help_footer = Some(footer.to_string());
        self
    }

    /// Sets the version footer text.
    pub fn with_version_footer(mut self, footer: &str) -> Self {
        self.version_footer = Some(footer.to_string());
        self
    }

    /// Sets the license text.
    pub fn with_license(mut self, license: &str) -> Self {
        self.license = Some(license.to_string());
        self
    }
}

/// Renders the help text for an option table.
///
/// Sections appear in a fixed order — header, application name, version
/// line, one row per visible spec, footer, license — with each section
/// skipped when its toggle in
/// [`config.help_sections`](crate::HelpSections) is off or its [`AppInfo`]
/// field is unset. Hidden specs are excluded from the rows, and names are
/// spelled with the configured prefix style.
///
/// # Examples
///
/// ```
/// use argmatch_core::*;
///
/// let specs = vec![
///     OptionSpec::flag(Some("v"), Some("verbose")).with_description("Verbose output"),
///     OptionSpec::flag(None, Some("trace")).hidden(),
/// ];
/// let help = render_help(&specs, &ParserConfig::default(), &AppInfo::default());
/// assert!(help.contains("-v, --verbose"));
/// assert!(!help.contains("trace"));
/// ```
pub fn render_help(specs: &[OptionSpec], config: &ParserConfig, info: &AppInfo) -> String {
    let mut out = String::new();
    let sections = &config.help_sections;

    if sections.header {
        if let Some(header) = &info.help_header {
            out.push_str(header);
            out.push('\n');
        }
    }
    if sections.app_name {
        if let Some(name) = &info.name {
            out.push_str(name);
            out.push('\n');
        }
    }
    if sections.version {
        if let Some(line) = version_line(info) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(&option_rows(specs, config));

    if sections.footer {
        if let Some(footer) = &info.help_footer {
            out.push_str(footer);
            out.push('\n');
        }
    }
    if sections.license {
        if let Some(license) = &info.license {
            out.push_str(license);
            out.push('\n');
        }
    }

    out
}

/// Renders the version text.
///
/// The first line is `"{name} version {version}"`, or `"Version {version}"`
/// when no name is set, or the bare name when no version is set. The version
/// footer follows when enabled on the config, and the license text is always
/// appended when present.
///
/// # Examples
///
/// ```
/// use argmatch_core::*;
///
/// let info = AppInfo::new("mytool").with_version("0.3.1");
/// let text = render_version(&info, &ParserConfig::default());
/// assert_eq!(text, "mytool version 0.3.1\n");
/// ```
pub fn render_version(info: &AppInfo, config: &ParserConfig) -> String {
    let mut out = String::new();

    if let Some(line) = version_line(info) {
        out.push_str(&line);
        out.push('\n');
    } else if let Some(name) = &info.name {
        out.push_str(name);
        out.push('\n');
    }

    if config.version_footer {
        if let Some(footer) = &info.version_footer {
            out.push_str(footer);
            out.push('\n');
        }
    }
    if let Some(license) = &info.license {
        out.push_str(license);
        out.push('\n');
    }

    out
}

fn version_line(info: &AppInfo) -> Option<String> {
    let version = info.version.as_ref()?;
    Some(match &info.name {
        Some(name) => format!("{name} version {version}"),
        None => format!("Version {version}"),
    })
}

fn option_rows(specs: &[OptionSpec], config: &ParserConfig) -> String {
    let style = config.prefix_style;
    let rows: Vec<(String, &str)> = specs
        .iter()
        .filter(|spec| !spec.hidden)
        .map(|spec| {
            let name = match (&spec.short, &spec.long) {
                (Some(s), Some(l)) => format!(
                    "{}{}, {}{}",
                    style.short_prefix(),
                    s,
                    style.long_prefix(),
                    l
                ),
                (Some(s), None) => format!("{}{}", style.short_prefix(), s),
                (None, Some(l)) => format!("{}{}", style.long_prefix(), l),
                (None, None) => "?".to_string(),
            };
            (name, spec.description.as_deref().unwrap_or(""))
        })
        .collect();

    let max_name = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(4);
    let mut out = String::new();
    for (name, desc) in &rows {
        out.push_str(&format!("  {:<width$}  {desc}\n", name, width = max_name));
    }
    out
}
