//! Comment extraction from host-language source files.
//!
//! Outline documents are usually written inside ordinary source comments:
//!
//! ```text
//! // outline: time
//! //   functions:
//! //     now() time
//! ```
//!
//! Each comment body is returned with its markers stripped so it can be handed
//! straight to the parser. Only whole-line comments are considered; a comment
//! trailing code on the same line is ignored.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// File extensions recognized as source files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "go", "rs", "c", "h", "js", "ts", "java", "swift", "sh", "bash", "py", "rb", "star", "bzl",
];

/// `//`, `///` or `//!` followed by an optional space.
static RE_SLASH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//[/!]? ?(.*)$").unwrap());

static RE_HASH_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*# ?(.*)$").unwrap());

/// Leading ` * ` gutter inside a block comment.
static RE_BLOCK_GUTTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*(?: |$)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` line comments and `/* */` blocks.
    Slash,
    /// `#` line comments.
    Hash,
}

impl CommentStyle {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "go" | "rs" | "c" | "h" | "js" | "ts" | "java" | "swift" => Some(Self::Slash),
            "sh" | "bash" | "py" | "rb" | "star" | "bzl" => Some(Self::Hash),
            _ => None,
        }
    }
}

/// Comment bodies of `source`, in source order.
///
/// Consecutive line comments form one body; a blank or code line ends it.
pub fn extract_comments(source: &str, style: CommentStyle) -> Vec<String> {
    let mut bodies = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut lines = source.lines().enumerate();

    while let Some((i, line)) = lines.next() {
        if style == CommentStyle::Hash && i == 0 && line.starts_with("#!") {
            continue;
        }

        let re = match style {
            CommentStyle::Slash => &*RE_SLASH_LINE,
            CommentStyle::Hash => &*RE_HASH_LINE,
        };
        if let Some(caps) = re.captures(line) {
            current.push(caps.get(1).map_or("", |m| m.as_str()));
            continue;
        }
        flush(&mut current, &mut bodies);

        if style == CommentStyle::Slash {
            if let Some(rest) = line.trim_start().strip_prefix("/*") {
                // Same as line comments: the marker takes one following space.
                let rest = rest.strip_prefix(' ').unwrap_or(rest);
                let mut block = Vec::new();
                match rest.split_once("*/") {
                    Some((inner, _)) => block.push(inner.trim_end()),
                    None => {
                        block.push(rest);
                        for (_, line) in lines.by_ref() {
                            if let Some((inner, _)) = line.split_once("*/") {
                                block.push(inner.trim_end());
                                break;
                            }
                            block.push(line);
                        }
                    }
                }
                bodies.push(block_body(&block));
            }
        }
    }
    flush(&mut current, &mut bodies);
    bodies
}

fn flush(current: &mut Vec<&str>, bodies: &mut Vec<String>) {
    if !current.is_empty() {
        bodies.push(current.join("\n"));
        current.clear();
    }
}

/// Join the lines of a `/* */` block, dropping blank first/last lines and the
/// ` * ` gutter when every inner line carries one.
fn block_body(lines: &[&str]) -> String {
    let mut lines = lines.to_vec();
    if lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let gutter = !lines.is_empty() && lines.iter().all(|l| RE_BLOCK_GUTTER.is_match(l));
    if gutter {
        lines
            .iter()
            .map(|l| RE_BLOCK_GUTTER.replace(l, "").into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        lines.join("\n")
    }
}
