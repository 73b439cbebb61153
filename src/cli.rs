//! Command-line interface implementation for blank-project.
//! Provides argument parsing and the translation of flags into a [`Config`].

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{COVERAGE_DISABLED, DEFAULT_COVERAGE, DEFAULT_LINE_LENGTH};
use crate::error::Result;

/// Command-line arguments structure for blank-project.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a blank Python project", long_about = None)]
pub struct Args {
    /// Project directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Name of the project, also used as the package directory under src/
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Author
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Maximum line length for formatter and linter configs
    #[arg(long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: u32,

    /// Generate Python 2 compatible files
    #[arg(long)]
    pub python2: bool,

    /// Disable sphinx documentation
    #[arg(long)]
    pub no_docs: bool,

    /// Disable mypy
    #[arg(long)]
    pub no_mypy: bool,

    /// Disable pylint
    #[arg(long)]
    pub no_pylint: bool,

    /// Disable flake8
    #[arg(long)]
    pub no_flake8: bool,

    /// Disable isort
    #[arg(long)]
    pub no_isort: bool,

    /// Coverage --fail-under value; a negative value disables coverage
    #[arg(long, default_value_t = DEFAULT_COVERAGE, allow_negative_numbers = true)]
    pub coverage: i32,

    /// Disable coverage
    #[arg(long)]
    pub no_coverage: bool,

    /// Use the template tree in this directory instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the generation config described by the flags.
    ///
    /// `--no-coverage` takes precedence over `--coverage`.
    pub fn to_config(&self) -> Result<Config> {
        let coverage = if self.no_coverage { COVERAGE_DISABLED } else { self.coverage };

        Config::builder(self.name.as_str(), self.author.as_str())
            .line_length(self.line_length)
            .python2_compat(self.python2)
            .docs(!self.no_docs)
            .type_check(!self.no_mypy)
            .lint(!self.no_pylint)
            .style_check(!self.no_flake8)
            .import_sort(!self.no_isort)
            .coverage_threshold(coverage)
            .build()
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
