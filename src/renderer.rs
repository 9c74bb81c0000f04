//! Template rendering for generated project files.
//! Documents copied from the template library are themselves MiniJinja
//! templates; they are rendered against a device configuration and
//! replaced in place.
use crate::error::Result;
use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that rejects undefined placeholders and keeps
    /// the template's trailing newline.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse, or refers
    ///   to a value missing from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Renders the file at `path` in place.
///
/// The rendered text is written to a temporary file next to `path`, which
/// then replaces the original atomically. On any failure the original file
/// is left untouched and the temporary file is removed.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read, written or replaced
/// * `Error::MinijinjaError` if rendering fails
pub fn render_file<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    path: P,
    context: &serde_json::Value,
) -> Result<()> {
    let path = path.as_ref();
    debug!("Rendering file: {}", path.display());

    let template = fs::read_to_string(path)?;
    let permissions = fs::metadata(path)?.permissions();
    let rendered = engine.render(&template, context)?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(rendered.as_bytes())?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
