//! Template sources for blank-project.
//! A source is a read-only tree of scaffold files. Files whose name ends with
//! [`TEMPLATE_SUFFIX`] are rendered, everything else is copied verbatim.
use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::trace;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// How a template file is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Copied byte for byte
    Static,
    /// Rendered with the configuration context
    Template,
}

/// A `/`-separated path relative to the root of a template source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplatePath(String);

impl TemplatePath {
    /// Wraps a `/`-separated relative path.
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    /// The path as listed by the source, marker suffix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// A path is a template iff its last segment carries the marker suffix
    /// and is longer than the marker itself.
    pub fn kind(&self) -> TemplateKind {
        let file_name = self.file_name();
        if file_name.len() > TEMPLATE_SUFFIX.len() && file_name.ends_with(TEMPLATE_SUFFIX) {
            TemplateKind::Template
        } else {
            TemplateKind::Static
        }
    }

    /// Shorthand for `kind() == TemplateKind::Template`.
    pub fn is_template(&self) -> bool {
        self.kind() == TemplateKind::Template
    }

    /// Relative path of the generated file, marker suffix removed.
    pub fn output_path(&self) -> &str {
        match self.kind() {
            TemplateKind::Template => &self.0[..self.0.len() - TEMPLATE_SUFFIX.len()],
            TemplateKind::Static => &self.0,
        }
    }

    /// Joins the output path onto `root` one segment at a time.
    pub fn target_in<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.output_path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.as_ref().to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for TemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplatePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A read-only tree of template files.
pub trait TemplateSource {
    /// Human readable description used in log messages.
    fn describe(&self) -> String;

    /// Lazily lists every file under the source, relative to its root.
    ///
    /// Each call starts a fresh traversal. Order is unspecified.
    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<TemplatePath>> + '_>;

    /// Returns the raw bytes of a file.
    ///
    /// # Errors
    /// * `Error::NotFound` if the path does not exist in the source
    fn read(&self, path: &TemplatePath) -> Result<Cow<'_, [u8]>>;

    /// Renderer used for template files.
    fn renderer(&self) -> &dyn TemplateRenderer;

    /// Renders a template file with the given context.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the path is not a template, is not valid
    ///   UTF-8, does not parse, or references an undefined variable
    /// * `Error::NotFound` if the path does not exist in the source
    fn render(&self, path: &TemplatePath, context: &serde_json::Value) -> Result<String> {
        if !path.is_template() {
            return Err(Error::template(path.as_str(), "not a template file"));
        }
        let raw = self.read(path)?;
        let text = std::str::from_utf8(&raw).map_err(|e| Error::template(path.as_str(), e))?;
        self.renderer().render(path.as_str(), text, context)
    }
}

#[derive(RustEmbed)]
#[folder = "template/"]
struct BundledTree;

/// The scaffold tree compiled into the binary.
#[derive(Default)]
pub struct EmbeddedTemplates {
    renderer: MiniJinjaRenderer,
}

impl EmbeddedTemplates {
    /// Opens the tree bundled at compile time.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn describe(&self) -> String {
        "bundled templates".to_string()
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<TemplatePath>> + '_> {
        Box::new(BundledTree::iter().map(|path| Ok(TemplatePath::new(path.into_owned()))))
    }

    fn read(&self, path: &TemplatePath) -> Result<Cow<'_, [u8]>> {
        trace!("Reading bundled file: {}", path);
        BundledTree::get(path.as_str())
            .map(|file| file.data)
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }

    fn renderer(&self) -> &dyn TemplateRenderer {
        &self.renderer
    }
}

/// A scaffold tree read from a directory on disk.
pub struct DirectoryTemplates {
    root: PathBuf,
    renderer: MiniJinjaRenderer,
}

impl DirectoryTemplates {
    /// Opens the tree rooted at `root`.
    ///
    /// # Errors
    /// * `Error::NotFound` if `root` is not an existing directory
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::NotFound(root.display().to_string()));
        }
        Ok(Self { root: root.to_path_buf(), renderer: MiniJinjaRenderer::new() })
    }

    /// Directory the tree is read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative(&self, path: &Path) -> Result<TemplatePath> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            Error::NotFound(format!("{} is outside {}", path.display(), self.root.display()))
        })?;
        let segments = relative
            .components()
            .map(|component| match component {
                Component::Normal(segment) => segment.to_str().ok_or_else(|| {
                    Error::template(relative.display().to_string(), "path is not valid UTF-8")
                }),
                _ => Err(Error::NotFound(relative.display().to_string())),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TemplatePath::new(segments.join("/")))
    }

    /// Resolves `path` under the root. Only plain file and directory names are
    /// accepted, so the result can never point outside the tree.
    fn absolute(&self, path: &TemplatePath) -> Result<PathBuf> {
        path.as_str().split('/').try_fold(self.root.clone(), |full, segment| {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) if name == segment => Ok(full.join(name)),
                _ => Err(Error::NotFound(path.to_string())),
            }
        })
    }
}

impl TemplateSource for DirectoryTemplates {
    fn describe(&self) -> String {
        format!("templates in '{}'", self.root().display())
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<TemplatePath>> + '_> {
        let walker = WalkDir::new(&self.root).follow_links(true).min_depth(1);
        Box::new(walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(self.relative(entry.path())),
            Err(e) => {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                Some(Err(Error::io(&path, e.into())))
            }
        }))
    }

    fn read(&self, path: &TemplatePath) -> Result<Cow<'_, [u8]>> {
        let full_path = self.absolute(path)?;
        if !full_path.is_file() {
            return Err(Error::NotFound(path.to_string()));
        }
        trace!("Reading template file: {}", full_path.display());
        fs::read(&full_path).map(Cow::Owned).map_err(|e| Error::io(&full_path, e))
    }

    fn renderer(&self) -> &dyn TemplateRenderer {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_decided_by_last_segment() {
        assert_eq!(TemplatePath::from("setup.py_template").kind(), TemplateKind::Template);
        assert_eq!(TemplatePath::from("docs/source/conf.py_template").kind(), TemplateKind::Template);
        assert_eq!(TemplatePath::from("docs/Makefile").kind(), TemplateKind::Static);
        assert_eq!(TemplatePath::from("a_template/file.txt").kind(), TemplateKind::Static);
        assert_eq!(TemplatePath::from("_template").kind(), TemplateKind::Static);
    }

    #[test]
    fn test_output_path_drops_suffix() {
        assert_eq!(TemplatePath::from(".flake8_template").output_path(), ".flake8");
        assert_eq!(
            TemplatePath::from("requirements/dev.txt_template").output_path(),
            "requirements/dev.txt"
        );
        assert_eq!(TemplatePath::from("docs/make.bat").output_path(), "docs/make.bat");
    }

    #[test]
    fn test_target_in_joins_segments() {
        let target = TemplatePath::from("docs/source/index.rst_template").target_in("out");
        assert_eq!(target, Path::new("out").join("docs").join("source").join("index.rst"));
    }

    #[test]
    fn test_bundled_tree_is_not_empty() {
        let source = EmbeddedTemplates::new();
        let paths: Vec<_> = source.enumerate().collect::<Result<_>>().unwrap();
        assert!(paths.contains(&TemplatePath::from("setup.py_template")));
        assert!(paths.contains(&TemplatePath::from("docs/Makefile")));
    }
}
