//! Renderers for parsed outline documents, selected by format name or
//! loaded from a user template.

pub mod html;
pub mod json;
pub mod markdown;
pub mod template;

use anyhow::{anyhow, Result};
use outline_syntax::Document;

/// Trait for rendering documents into a specific output format.
pub trait Renderer {
    fn render(&self, docs: &[Document]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}
