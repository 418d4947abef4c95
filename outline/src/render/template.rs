//! User-supplied template renderer.
//!
//! The template sees the documents as `docs`, a list of the serialized model
//! (`doc.name`, `doc.functions`, `fn.signature`, `fn["return"]`, ...).

use crate::render::Renderer;
use anyhow::{Context, Result};
use minijinja::{context, Environment};
use outline_syntax::Document;
use std::fs;
use std::path::Path;

pub struct TemplateRenderer {
    name: String,
    source: String,
    extension: String,
}

impl TemplateRenderer {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            extension: extension.into(),
        }
    }

    /// Load a template file. Output files take the template's extension,
    /// `txt` when it has none.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("txt");
        Ok(Self::new(path.display().to_string(), source, extension))
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, docs: &[Document]) -> Result<String> {
        let mut env = Environment::new();
        env.add_template(&self.name, &self.source)
            .with_context(|| format!("invalid template {}", self.name))?;
        let template = env.get_template(&self.name)?;
        let out = template
            .render(context! { docs => docs })
            .with_context(|| format!("failed to render template {}", self.name))?;
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }
}
