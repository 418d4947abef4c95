//! HTML renderer: standalone HTML page with semantic markup.

use crate::render::Renderer;
use crate::toc::github_slug;
use anyhow::Result;
use outline_syntax::{Document, Function, Type};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, docs: &[Document]) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let [doc] = docs {
            if !doc.name.is_empty() {
                out.push_str(&format!("<title>{}</title>\n", html_escape(&doc.name)));
            }
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("table { border-collapse: collapse; }\n");
        out.push_str("th, td { border: 1px solid #ddd; padding: 0.25em 0.5em; text-align: left; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        for doc in docs {
            out.push_str(&render_document_html(doc));
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_document_html(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<section>\n");

    if !doc.name.is_empty() {
        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&doc.name)));
    }
    if !doc.path.is_empty() {
        out.push_str(&format!("<p><code>{}</code></p>\n", html_escape(&doc.path)));
    }
    if !doc.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&doc.description)));
    }

    if !doc.functions.is_empty() {
        out.push_str("<h2>Functions</h2>\n");
        if doc.functions.len() > 1 {
            out.push_str("<ul>\n");
            for func in &doc.functions {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\"><code>{}</code></a></li>\n",
                    html_escape(&github_slug(&func.signature)),
                    html_escape(&func.signature)
                ));
            }
            out.push_str("</ul>\n");
        }
        for func in &doc.functions {
            out.push_str(&render_function_html(func, "h4"));
        }
    }

    if !doc.types.is_empty() {
        out.push_str("<h2>Types</h2>\n");
        for t in &doc.types {
            out.push_str(&render_type_html(t));
        }
    }

    out.push_str("</section>\n");
    out
}

fn render_function_html(func: &Function, heading: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<{h} id=\"{}\"><code>{}</code></{h}>\n",
        html_escape(&github_slug(&func.signature)),
        html_escape(&func.signature),
        h = heading
    ));

    if !func.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&func.description)));
    }

    if !func.params.is_empty() {
        out.push_str("<table>\n<tr><th>name</th><th>type</th><th>description</th></tr>\n");
        for param in &func.params {
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&param.name),
                html_escape(&param.type_name),
                html_escape(&param.description)
            ));
        }
        out.push_str("</table>\n");
    }

    if !func.return_value.is_empty() {
        out.push_str(&format!(
            "<p><strong>Returns:</strong> {}</p>\n",
            html_escape(&func.return_value)
        ));
    }

    for example in &func.examples {
        if !example.name.is_empty() {
            out.push_str(&format!("<h5>{}</h5>\n", html_escape(&example.name)));
        }
        if !example.description.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", html_escape(&example.description)));
        }
        if !example.code.is_empty() {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", html_escape(&example.code)));
        }
    }

    out
}

fn render_type_html(t: &Type) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\"><code>{}</code></h3>\n",
        html_escape(&github_slug(&t.name)),
        html_escape(&t.name)
    ));

    if !t.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&t.description)));
    }

    if !t.fields.is_empty() {
        out.push_str("<h4>Fields</h4>\n");
        out.push_str("<table>\n<tr><th>name</th><th>type</th><th>description</th></tr>\n");
        for field in &t.fields {
            out.push_str(&format!(
                "<tr><td>{}</td><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&field.name),
                html_escape(&field.type_name),
                html_escape(&field.description)
            ));
        }
        out.push_str("</table>\n");
    }

    if !t.methods.is_empty() {
        out.push_str("<h4>Methods</h4>\n");
        for method in &t.methods {
            out.push_str(&render_function_html(method, "h5"));
        }
    }

    if !t.operators.is_empty() {
        out.push_str("<h4>Operators</h4>\n");
        out.push_str("<table>\n<tr><th>operator</th><th>description</th></tr>\n");
        for op in &t.operators {
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&op.expression),
                html_escape(&op.description)
            ));
        }
        out.push_str("</table>\n");
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
