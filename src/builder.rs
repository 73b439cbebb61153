//! Project materialization.
//! Combines configuration, skip rules and a template source to produce the
//! generated project under a target directory.
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::{
    config::Config,
    constants::{PACKAGE_MARKER, SOURCE_DIR},
    error::{Error, Result},
    skip::SkipRules,
    template::{TemplateKind, TemplatePath, TemplateSource},
};

/// No-op when the directory already exists.
fn create_dir_all(path: &Path) -> Result<()> {
    if !path.is_dir() {
        debug!("Creating directory: {}", path.display());
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Creates `src/<name>` with an empty package marker, unless the directory
/// already exists. A pre-existing directory is left untouched.
fn ensure_source_stub(target_dir: &Path, name: &str) -> Result<()> {
    let stub_dir = target_dir.join(SOURCE_DIR).join(name);
    if stub_dir.exists() {
        debug!("Source directory {} already exists, leaving it as is", stub_dir.display());
        return Ok(());
    }

    create_dir_all(&stub_dir)?;
    let marker = stub_dir.join(PACKAGE_MARKER);
    write_file(&marker, b"")?;
    info!("Created: '{}'", marker.display());
    Ok(())
}

/// Generates projects from a template source.
pub struct Builder<'a> {
    source: &'a dyn TemplateSource,
}

impl<'a> Builder<'a> {
    /// Creates a builder reading from `source`.
    ///
    /// # Arguments
    /// * `source` - Template tree to enumerate, render and copy from
    pub fn new(source: &'a dyn TemplateSource) -> Self {
        Self { source }
    }

    /// Materializes the project described by `config` under `target_dir`.
    ///
    /// Existing directories are reused; existing files at generated paths are
    /// overwritten. Unrelated content in `target_dir` is never touched.
    ///
    /// # Errors
    /// * `Error::IoError` on any filesystem failure
    /// * `Error::TemplateError` if a template fails to render
    /// * `Error::NotFound` if the source lists a file it cannot read
    ///
    /// The first error aborts the build; files already written stay on disk.
    pub fn build<P: AsRef<Path>>(&self, target_dir: P, config: &Config) -> Result<()> {
        let target_dir = target_dir.as_ref();
        debug!(
            "Building '{}' from {} into {}",
            config.name(),
            self.source.describe(),
            target_dir.display()
        );

        create_dir_all(target_dir)?;
        ensure_source_stub(target_dir, config.name())?;

        let skip_rules = SkipRules::for_config(config);
        let context = config.context();

        for entry in self.source.enumerate() {
            let path = entry?;
            if let Some(rule) = skip_rules.matching(path.output_path()) {
                debug!("Skipping {} ({:?} disabled)", path, rule);
                continue;
            }
            self.materialize(&path, target_dir, &context)?;
        }

        Ok(())
    }

    fn materialize(
        &self,
        path: &TemplatePath,
        target_dir: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        let target_path = path.target_in(target_dir);
        if let Some(parent) = target_path.parent() {
            create_dir_all(parent)?;
        }

        match path.kind() {
            TemplateKind::Template => {
                let content = self.source.render(path, context)?;
                write_file(&target_path, content.as_bytes())?;
                info!("Rendered: '{}'", target_path.display());
            }
            TemplateKind::Static => {
                let content = self.source.read(path)?;
                write_file(&target_path, &content)?;
                info!("Copied: '{}'", target_path.display());
            }
        }
        Ok(())
    }
}
