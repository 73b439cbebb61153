//! Template rendering for blank-project.
//! Rendering is strict: referencing a variable missing from the context fails
//! instead of producing an empty string.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template text with the given context.
    ///
    /// # Arguments
    /// * `name` - Name reported in errors, usually the template path
    /// * `template` - Template text to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
#[derive(Clone)]
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer configured for generating source files.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders template text using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if:
    ///   - the template does not parse
    ///   - the template references an undefined variable
    ///   - evaluation fails for any other reason
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())
            .map_err(|e| Error::template(name, e))?;

        let tmpl = env.get_template(name).map_err(|e| Error::template(name, e))?;

        tmpl.render(context).map_err(|e| Error::template(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_variables() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "test", "value": 42 });

        let result = renderer.render("t", "Hello {{ name }}: {{ value }}\n", &context).unwrap();
        assert_eq!(result, "Hello test: 42\n");
    }

    #[test]
    fn test_block_tags_leave_no_blank_lines() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "flag": false });

        let result = renderer.render("t", "a\n{% if flag %}\nb\n{% endif %}\nc\n", &context).unwrap();
        assert_eq!(result, "a\nc\n");
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        let err = renderer.render("t", "{{ missing }}", &serde_json::json!({})).unwrap_err();

        match err {
            Error::TemplateError { path, .. } => assert_eq!(path, "t"),
            other => panic!("Expected TemplateError, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("t", "{% if %}", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::TemplateError { .. })));
    }
}
