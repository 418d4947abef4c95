//! GitHub-flavored markdown renderer.

use crate::render::Renderer;
use crate::toc;
use anyhow::Result;
use outline_syntax::{Document, Function, Type};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &[Document]) -> Result<String> {
        let blocks: Vec<String> = docs.iter().map(render_document).collect();
        Ok(blocks.join("\n"))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_document(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !doc.name.is_empty() {
        lines.push(format!("# {}\n", doc.name));
    }
    if !doc.path.is_empty() {
        lines.push(format!("`{}`\n", doc.path));
    }
    if !doc.description.is_empty() {
        lines.push(format!("{}\n", doc.description));
    }

    if !doc.functions.is_empty() {
        lines.push("## Functions\n".to_string());
        // Index
        if doc.functions.len() > 1 {
            for func in &doc.functions {
                lines.push(toc::render_toc_item(&func.signature));
            }
            lines.push(String::new());
        }
        for func in &doc.functions {
            render_function(&mut lines, func);
        }
    }

    if !doc.types.is_empty() {
        lines.push("## Types\n".to_string());
        for t in &doc.types {
            render_type(&mut lines, t);
        }
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// Render a function or method block.
fn render_function(lines: &mut Vec<String>, func: &Function) {
    lines.push(format!("#### `{}`\n", func.signature));

    if !func.description.is_empty() {
        lines.push(format!("{}\n", func.description));
    }

    if !func.params.is_empty() {
        lines.push("**Parameters**\n".to_string());
        lines.push("| name | type | description |".to_string());
        lines.push("|------|------|-------------|".to_string());
        for param in &func.params {
            lines.push(format!(
                "| `{}` | {} | {} |",
                cell(&param.name),
                code_cell(&param.type_name),
                cell(&param.description)
            ));
        }
        lines.push(String::new());
    }

    if !func.return_value.is_empty() {
        lines.push(format!("**Returns:** {}\n", func.return_value));
    }

    if !func.examples.is_empty() {
        lines.push("**Examples**\n".to_string());
        for example in &func.examples {
            if !example.name.is_empty() {
                lines.push(format!("##### {}\n", example.name));
            }
            if !example.description.is_empty() {
                lines.push(format!("{}\n", example.description));
            }
            if !example.code.is_empty() {
                lines.push("```".to_string());
                lines.push(example.code.clone());
                lines.push("```".to_string());
                lines.push(String::new());
            }
        }
    }
}

fn render_type(lines: &mut Vec<String>, t: &Type) {
    lines.push(format!("### `{}`\n", t.name));

    if !t.description.is_empty() {
        lines.push(format!("{}\n", t.description));
    }

    if !t.fields.is_empty() {
        lines.push("**Fields**\n".to_string());
        lines.push("| name | type | description |".to_string());
        lines.push("|------|------|-------------|".to_string());
        for field in &t.fields {
            lines.push(format!(
                "| {} | {} | {} |",
                cell(&field.name),
                code_cell(&field.type_name),
                cell(&field.description)
            ));
        }
        lines.push(String::new());
    }

    if !t.methods.is_empty() {
        lines.push("**Methods**\n".to_string());
        for method in &t.methods {
            render_function(lines, method);
        }
    }

    if !t.operators.is_empty() {
        lines.push("**Operators**\n".to_string());
        lines.push("| operator | description |".to_string());
        lines.push("|----------|-------------|".to_string());
        for op in &t.operators {
            lines.push(format!(
                "| `{}` | {} |",
                cell(&op.expression),
                cell(&op.description)
            ));
        }
        lines.push(String::new());
    }
}

/// Escape text for a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

fn code_cell(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("`{}`", cell(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_syntax::{parse_str, ParseOptions};

    fn render(input: &str) -> String {
        let docs = parse_str(input, ParseOptions::default()).unwrap();
        MarkdownRenderer.render(&docs).unwrap()
    }

    #[test]
    fn single_function_has_no_index() {
        let out = render("outline: one\n  functions:\n    only() int\n      the only one\n");
        assert_eq!(
            out,
            "# one\n\n## Functions\n\n#### `only() int`\n\nthe only one\n"
        );
    }

    #[test]
    fn index_links_each_function() {
        let out = render(
            "outline: twoFuncs\n  functions:\n    difference(a,b int) int\n    sum(a,b int) int\n      add two things together\n",
        );
        assert!(out.contains("* [`difference(a,b int) int`](#differenceab-int-int)\n"));
        assert!(out.contains("* [`sum(a,b int) int`](#sumab-int-int)\n"));
        assert!(out.contains("#### `sum(a,b int) int`\n\nadd two things together\n"));
    }

    #[test]
    fn params_return_and_examples() {
        let out = render(
            "outline: math
  functions:
    sum(a,b int) int
      params:
        a int
          first addend
        b int
      return: int
      examples:
        basic
          adding small numbers
          code:
            sum(1, 2)
",
        );
        assert!(out.contains("| name | type | description |\n|------|------|-------------|\n"));
        assert!(out.contains("| `a` | `int` | first addend |\n"));
        assert!(out.contains("| `b` | `int` |  |\n"));
        assert!(out.contains("**Returns:** int\n"));
        assert!(out.contains("##### basic\n\nadding small numbers\n\n```\nsum(1, 2)\n```\n"));
    }

    #[test]
    fn types_with_fields_methods_and_operators() {
        let out = render(
            "outline: time
  types:
    duration
      a period of time
      methods:
        add(d duration) int
      fields:
        hours float
      operators:
        duration + time = time
",
        );
        assert!(out.contains("## Types\n\n### `duration`\n\na period of time\n"));
        assert!(out.contains("**Fields**\n\n| name | type | description |"));
        assert!(out.contains("| hours | `float` |  |\n"));
        assert!(out.contains("**Methods**\n\n#### `add(d duration) int`\n"));
        assert!(out.contains("| `duration + time = time` |  |\n"));
    }

    #[test]
    fn cells_escape_pipes() {
        assert_eq!(cell("a | b"), "a \\| b");
        assert_eq!(code_cell(""), "");
        assert_eq!(code_cell("int"), "`int`");
    }
}
