//! JSON renderer: the document model as-is, for tooling integration.

use crate::render::Renderer;
use anyhow::Result;
use outline_syntax::Document;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, docs: &[Document]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(docs)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
