//! blank-project's main application entry point.
//! Parses the command line, builds the configuration and runs the generator.

use blank_project::{
    builder::Builder,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    template::{DirectoryTemplates, EmbeddedTemplates, TemplateSource},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Validates the configuration before touching the filesystem
/// 2. Selects the bundled or on-disk template tree
/// 3. Materializes the project
fn run(args: Args) -> Result<()> {
    let config = args.to_config()?;

    let source: Box<dyn TemplateSource> = match &args.template_dir {
        Some(dir) => Box::new(DirectoryTemplates::new(dir)?),
        None => Box::new(EmbeddedTemplates::new()),
    };

    Builder::new(&*source).build(&args.dir, &config)?;

    println!("Project '{}' created in {}.", config.name(), args.dir.display());
    Ok(())
}
