//! blank-project generates a skeleton Python project from a bundled template tree.
//! Optional tooling (docs, type checking, linting, style checks, import sorting,
//! coverage) is included or left out according to a [`config::Config`].

use std::path::Path;

/// Command-line interface module
pub mod cli;

/// Generation parameters and the variables exposed to templates
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Materialization of the project tree
pub mod builder;

/// Template rendering engine
pub mod renderer;

/// Exclusion rules for disabled features
pub mod skip;

/// Template sources: the bundled tree and on-disk trees
pub mod template;

/// Builds a project from the bundled templates.
pub fn build<P: AsRef<Path>>(target_dir: P, config: &config::Config) -> error::Result<()> {
    let source = template::EmbeddedTemplates::new();
    builder::Builder::new(&source).build(target_dir, config)
}
