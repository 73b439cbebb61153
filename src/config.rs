//! Generation parameters for a blank project.
//! A [`Config`] is assembled through [`ConfigBuilder`], validated once, and then
//! exposed to templates as a flat variable mapping.

use chrono::Datelike;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{COVERAGE_DISABLED, DEFAULT_COVERAGE, DEFAULT_LINE_LENGTH};
use crate::error::{Error, Result};

static PATH_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\\]").unwrap());

/// The name becomes `src/<name>`, so it must stay a single path segment.
fn is_single_segment(name: &str) -> bool {
    name != "." && name != ".." && !PATH_SEPARATOR_RE.is_match(name)
}

/// Immutable project configuration.
///
/// `coverage_threshold` is the single source of truth for coverage support:
/// a negative value disables it, anything else enables it and is used as the
/// `fail_under` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    name: String,
    author: String,
    line_length: u32,
    python2_compat: bool,
    docs_enabled: bool,
    type_check_enabled: bool,
    lint_enabled: bool,
    style_check_enabled: bool,
    import_sort_enabled: bool,
    coverage_threshold: i32,
    generation_year: i32,
}

/// Variables handed to the template renderer.
#[derive(Serialize)]
struct Context<'a> {
    name: &'a str,
    author: &'a str,
    line_length: u32,
    python2_compat: bool,
    docs_enabled: bool,
    type_check_enabled: bool,
    lint_enabled: bool,
    style_check_enabled: bool,
    import_sort_enabled: bool,
    coverage_enabled: bool,
    coverage_threshold: i32,
    generation_year: i32,
}

impl Config {
    /// Starts a builder with the two required fields; everything else defaults.
    pub fn builder<N: Into<String>, A: Into<String>>(name: N, author: A) -> ConfigBuilder {
        ConfigBuilder::new(name, author)
    }

    /// Project name, also the package directory under `src/`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Maximum line length fed into formatter and linter configs.
    pub fn line_length(&self) -> u32 {
        self.line_length
    }

    /// Whether generated files carry Python 2 compatibility code.
    pub fn python2_compat(&self) -> bool {
        self.python2_compat
    }

    /// Whether the `docs/` subtree is generated.
    pub fn docs_enabled(&self) -> bool {
        self.docs_enabled
    }

    /// Whether mypy is configured.
    pub fn type_check_enabled(&self) -> bool {
        self.type_check_enabled
    }

    /// Whether pylint is configured.
    pub fn lint_enabled(&self) -> bool {
        self.lint_enabled
    }

    /// Whether flake8 is configured.
    pub fn style_check_enabled(&self) -> bool {
        self.style_check_enabled
    }

    /// Whether isort is configured.
    pub fn import_sort_enabled(&self) -> bool {
        self.import_sort_enabled
    }

    /// Derived from the threshold, never stored separately.
    pub fn coverage_enabled(&self) -> bool {
        self.coverage_threshold >= 0
    }

    /// `fail_under` value; negative when coverage is disabled.
    pub fn coverage_threshold(&self) -> i32 {
        self.coverage_threshold
    }

    /// Year captured when the configuration was built.
    pub fn generation_year(&self) -> i32 {
        self.generation_year
    }

    /// Returns the full variable mapping consumed by template rendering.
    ///
    /// Every flag and derived value is present, since templates have no other
    /// source of truth.
    pub fn context(&self) -> serde_json::Value {
        let context = Context {
            name: &self.name,
            author: &self.author,
            line_length: self.line_length,
            python2_compat: self.python2_compat,
            docs_enabled: self.docs_enabled,
            type_check_enabled: self.type_check_enabled,
            lint_enabled: self.lint_enabled,
            style_check_enabled: self.style_check_enabled,
            import_sort_enabled: self.import_sort_enabled,
            coverage_enabled: self.coverage_enabled(),
            coverage_threshold: self.coverage_threshold,
            generation_year: self.generation_year,
        };
        // Plain strings, integers and booleans always serialize.
        serde_json::to_value(context).unwrap_or_default()
    }
}

/// Collects optional settings before producing a validated [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    name: String,
    author: String,
    line_length: u32,
    python2_compat: bool,
    docs_enabled: bool,
    type_check_enabled: bool,
    lint_enabled: bool,
    style_check_enabled: bool,
    import_sort_enabled: bool,
    coverage_threshold: i32,
    generation_year: Option<i32>,
}

impl ConfigBuilder {
    /// Starts from the defaults: every feature enabled, line length 79,
    /// coverage threshold 100, no Python 2 compatibility.
    pub fn new<N: Into<String>, A: Into<String>>(name: N, author: A) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            line_length: DEFAULT_LINE_LENGTH,
            python2_compat: false,
            docs_enabled: true,
            type_check_enabled: true,
            lint_enabled: true,
            style_check_enabled: true,
            import_sort_enabled: true,
            coverage_threshold: DEFAULT_COVERAGE,
            generation_year: None,
        }
    }

    /// Sets the maximum line length.
    pub fn line_length(mut self, line_length: u32) -> Self {
        self.line_length = line_length;
        self
    }

    /// Toggles Python 2 compatibility content.
    pub fn python2_compat(mut self, enabled: bool) -> Self {
        self.python2_compat = enabled;
        self
    }

    /// Toggles the sphinx documentation subtree.
    pub fn docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }

    /// Toggles mypy.
    pub fn type_check(mut self, enabled: bool) -> Self {
        self.type_check_enabled = enabled;
        self
    }

    /// Toggles pylint.
    pub fn lint(mut self, enabled: bool) -> Self {
        self.lint_enabled = enabled;
        self
    }

    /// Toggles flake8.
    pub fn style_check(mut self, enabled: bool) -> Self {
        self.style_check_enabled = enabled;
        self
    }

    /// Toggles isort.
    pub fn import_sort(mut self, enabled: bool) -> Self {
        self.import_sort_enabled = enabled;
        self
    }

    /// Negative thresholds disable coverage support.
    pub fn coverage_threshold(mut self, threshold: i32) -> Self {
        self.coverage_threshold = threshold;
        self
    }

    /// Same as a threshold of -1.
    pub fn disable_coverage(self) -> Self {
        self.coverage_threshold(COVERAGE_DISABLED)
    }

    /// Pins the year used in copyright notices instead of the current one.
    pub fn generation_year(mut self, year: i32) -> Self {
        self.generation_year = Some(year);
        self
    }

    /// Validates the collected settings.
    ///
    /// # Errors
    /// * `Error::InvalidConfig` if the name or author is blank, the name contains
    ///   a path separator or is `.`/`..`, or the line length is zero
    pub fn build(self) -> Result<Config> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("project name must not be empty".to_string()));
        }
        if !is_single_segment(&self.name) {
            return Err(Error::InvalidConfig(format!(
                "project name '{}' must be a single path segment",
                self.name
            )));
        }
        if self.author.trim().is_empty() {
            return Err(Error::InvalidConfig("author must not be empty".to_string()));
        }
        if self.line_length == 0 {
            return Err(Error::InvalidConfig("line length must be positive".to_string()));
        }

        let generation_year =
            self.generation_year.unwrap_or_else(|| chrono::Local::now().year());
        debug!("Configuration for '{}' captured with year {}", self.name, generation_year);

        Ok(Config {
            name: self.name,
            author: self.author,
            line_length: self.line_length,
            python2_compat: self.python2_compat,
            docs_enabled: self.docs_enabled,
            type_check_enabled: self.type_check_enabled,
            lint_enabled: self.lint_enabled,
            style_check_enabled: self.style_check_enabled,
            import_sort_enabled: self.import_sort_enabled,
            coverage_threshold: self.coverage_threshold,
            generation_year,
        })
    }
}
