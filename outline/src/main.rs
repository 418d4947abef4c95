//! outline: a tool for outlining software packages.
//!
//! - `outline fmt time.outline` prints documents in canonical form
//! - `outline render -f html -o docs/ lib/*.outline` renders documents
//! - `outline template -t index.md.j2 lib/*.outline` renders through a template
//! - `outline package ./lib` pulls outline documents out of source comments,
//!   merges them by name and renders the result

mod extract;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use outline_syntax::{merge_by_name, Docs, ParseOptions};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outline", about = "outline is a tool for outlining software packages")]
struct Cli {
    /// Show debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Alpha-sort functions (and type methods) by signature
    #[arg(long, global = true)]
    sort_functions: bool,

    /// Alpha-sort types by name
    #[arg(long, global = true)]
    sort_types: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print outline documents in canonical form
    Fmt {
        /// Input files (glob patterns supported). If omitted, reads from stdin.
        files: Vec<String>,

        /// Indent unit: a literal string, or "tab"
        #[arg(long, default_value = "  ")]
        indent: String,
    },

    /// Render outline documents as markdown, html, json or through a template
    #[command(visible_aliases = ["template", "md"])]
    Render {
        /// Input files, directories or glob patterns. If omitted, reads from stdin.
        files: Vec<String>,

        /// Write one file per document into this directory instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Extract outline documents from source comments, merge them by name and render
    #[command(visible_alias = "pkg")]
    Package {
        /// Source files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Template file to load. Overrides --format.
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Don't alpha-sort outline documents
    #[arg(long)]
    no_sort: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let options = ParseOptions::new()
        .sort_functions(cli.sort_functions)
        .sort_types(cli.sort_types);

    match cli.command {
        Command::Fmt { files, indent } => fmt(&files, &indent, options),
        Command::Render {
            files,
            output,
            render,
        } => render_docs(&files, output.as_deref(), &render, options),
        Command::Package { paths, render } => package(&paths, &render, options),
    }
}

/// Log to stderr: warnings by default, debug with `--debug`, `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn fmt(files: &[String], indent: &str, options: ParseOptions) -> Result<()> {
    let unit = indent_unit(indent);
    for (source, mut docs) in read_inputs(files, options)? {
        debug!(source = %source, documents = docs.len(), "formatting");
        for doc in docs.iter_mut() {
            doc.sort();
        }
        print!("{}", docs.marshal_indent(0, unit));
    }
    Ok(())
}

fn render_docs(
    files: &[String],
    output: Option<&Path>,
    args: &RenderArgs,
    options: ParseOptions,
) -> Result<()> {
    let mut docs = Docs::new();
    for (_, parsed) in read_inputs(files, options)? {
        docs.extend(parsed);
    }
    // One file per name: documents split across inputs are written together.
    if output.is_some() {
        docs = merge_by_name(docs);
    }
    if !args.no_sort {
        docs.sort();
    }

    let renderer = renderer(args)?;
    let Some(output_dir) = output else {
        print!("{}", renderer.render(&docs)?);
        return Ok(());
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut written = HashSet::new();
    for doc in docs.iter() {
        if doc.name.is_empty() {
            warn!(path = %doc.path, "skipping document without a name");
            continue;
        }
        let out_path = output_dir.join(format!(
            "{}.{}",
            output_name(&doc.name),
            renderer.file_extension()
        ));
        if !written.insert(out_path.clone()) {
            warn!(
                path = %out_path.display(),
                name = %doc.name,
                "overwriting output written for another document"
            );
        }
        debug!(path = %out_path.display(), "writing");
        let rendered = renderer.render(std::slice::from_ref(doc))?;
        fs::write(&out_path, rendered)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }
    Ok(())
}

fn package(paths: &[String], args: &RenderArgs, options: ParseOptions) -> Result<()> {
    let renderer = renderer(args)?;
    let files = expand_globs(paths, extract::SUPPORTED_EXTENSIONS)?;

    let mut found = Vec::new();
    for path in &files {
        let Some(style) = extract::CommentStyle::from_path(path) else {
            warn!(path = %path.display(), "skipping file with unsupported extension");
            continue;
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let comments = extract::extract_comments(&content, style);
        debug!(path = %path.display(), comments = comments.len(), "extracted comments");
        for body in comments {
            let docs = outline_syntax::parse_str(&body, options)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            found.extend(docs);
        }
    }

    let mut docs = merge_by_name(found);
    if !args.no_sort {
        docs.sort();
    }
    print!("{}", renderer.render(&docs)?);
    Ok(())
}

/// The user's template when one is given, else the renderer for `--format`.
fn renderer(args: &RenderArgs) -> Result<Box<dyn render::Renderer>> {
    match &args.template {
        Some(path) => Ok(Box::new(render::template::TemplateRenderer::from_file(path)?)),
        None => render::create_renderer(&args.format),
    }
}

/// Parse each input file, or stdin when no files are given.
fn read_inputs(files: &[String], options: ParseOptions) -> Result<Vec<(String, Docs)>> {
    if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let docs = outline_syntax::parse_str(&input, options).context("failed to parse stdin")?;
        return Ok(vec![("<stdin>".to_string(), docs)]);
    }

    let mut parsed = Vec::new();
    for path in expand_globs(files, OUTLINE_EXTENSIONS)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let docs = outline_syntax::parse_str(&content, options)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        parsed.push((path.to_string_lossy().to_string(), docs));
    }
    Ok(parsed)
}

/// Extensions picked up when a directory is given to `fmt` or `render`.
const OUTLINE_EXTENSIONS: &[&str] = &["outline"];

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for `extensions`.
fn expand_globs(patterns: &[String], extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| extensions.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    debug!(count = files.len(), "expanded inputs");
    Ok(files)
}

fn indent_unit(arg: &str) -> &str {
    match arg {
        "tab" | "\\t" => "\t",
        other => other,
    }
}

/// File name (without extension) for a document: "lib/time" → "lib_time".
fn output_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
