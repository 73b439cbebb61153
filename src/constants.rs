//! Common constants used throughout blank-project.

/// Suffix marking a template file; the generated file drops it from its name.
pub const TEMPLATE_SUFFIX: &str = "_template";

/// Directory holding the generated project's own sources.
pub const SOURCE_DIR: &str = "src";

/// Empty package marker written into a freshly created source directory.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Default maximum line length fed into formatter and linter configs.
pub const DEFAULT_LINE_LENGTH: u32 = 79;

/// Default `fail_under` threshold for coverage reporting.
pub const DEFAULT_COVERAGE: i32 = 100;

/// Threshold value meaning "coverage disabled".
pub const COVERAGE_DISABLED: i32 = -1;
