//! Indentation-scoped recursive-descent parser.
//!
//! The scanner's Indent and Newline tokens are folded into an indent level
//! attached to each significant token ([`Lexeme`]). Every grammar rule takes
//! the indent it requires, peeks at the next lexeme, and only consumes it if
//! the lexeme belongs to the rule. A rule that finds nothing returns
//! `Ok(None)` and the enclosing list ends; the grammar is permissive about
//! absent sections. The only structural errors are a nested `outline:` and an
//! unrecognized token inside a type body.

use crate::error::{Error, Result};
use crate::model::{Docs, Document, Example, Field, Function, Operator, Param, Type};
use crate::options::ParseOptions;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};
use std::io::BufRead;
use tracing::{debug, trace};

/// Parse every document in `reader`.
pub fn parse<R: BufRead>(reader: R, options: ParseOptions) -> Result<Docs> {
    Parser::new(reader, options).collect()
}

/// Parse every document in `input`.
pub fn parse_str(input: &str, options: ParseOptions) -> Result<Docs> {
    parse(input.as_bytes(), options)
}

/// Parse only the first document in `reader`.
pub fn parse_first<R: BufRead>(reader: R, options: ParseOptions) -> Result<Option<Document>> {
    Parser::new(reader, options).parse_one()
}

/// A significant token and the indent level of the line it sits on.
#[derive(Debug, Clone)]
struct Lexeme {
    token: Token,
    indent: usize,
}

/// Scanner wrapper with one lexeme of lookahead.
struct Cursor<R> {
    scanner: Scanner<R>,
    peeked: Option<Lexeme>,
    indent: usize,
}

impl<R: BufRead> Cursor<R> {
    fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            peeked: None,
            indent: 0,
        }
    }

    fn peek(&mut self) -> Result<&Lexeme> {
        let lexeme = match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.fetch()?,
        };
        Ok(self.peeked.insert(lexeme))
    }

    /// Kind and indent of the next lexeme.
    fn peek_kind(&mut self) -> Result<(TokenKind, usize)> {
        let lexeme = self.peek()?;
        Ok((lexeme.token.kind, lexeme.indent))
    }

    fn advance(&mut self) -> Result<Lexeme> {
        match self.peeked.take() {
            Some(lexeme) => Ok(lexeme),
            None => self.fetch(),
        }
    }

    /// Pull tokens until a significant one, tracking the indent of its line.
    fn fetch(&mut self) -> Result<Lexeme> {
        loop {
            let token = self.scanner.scan()?;
            match token.kind {
                TokenKind::Newline => self.indent = 0,
                TokenKind::Indent => self.indent += 1,
                TokenKind::Eof => return Ok(Lexeme { token, indent: 0 }),
                _ => {
                    return Ok(Lexeme {
                        token,
                        indent: self.indent,
                    })
                }
            }
        }
    }
}

/// Reads outline documents from a stream, one at a time.
pub struct Parser<R> {
    cursor: Cursor<R>,
    options: ParseOptions,
    failed: bool,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(reader),
            options,
            failed: false,
        }
    }

    /// Read the next `outline:` block, skipping anything before it.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn parse_one(&mut self) -> Result<Option<Document>> {
        loop {
            let lexeme = self.cursor.advance()?;
            match lexeme.token.kind {
                TokenKind::Outline => return self.document(lexeme.indent).map(Some),
                TokenKind::Eof => return Ok(None),
                kind => trace!(%kind, line = lexeme.token.pos.line + 1, "skipping token outside a document"),
            }
        }
    }

    fn document(&mut self, base: usize) -> Result<Document> {
        let mut doc = Document {
            options: self.options,
            ..Default::default()
        };

        let (kind, indent) = self.cursor.peek_kind()?;
        if kind == TokenKind::Text && indent >= base {
            doc.name = self.cursor.advance()?.token.text;
        }

        loop {
            let (kind, indent) = self.cursor.peek_kind()?;
            if kind == TokenKind::Eof || indent < base {
                break;
            }
            match kind {
                TokenKind::Path => {
                    self.cursor.advance()?;
                    if let Some(path) = self.single_text(indent)? {
                        doc.path = path;
                    }
                }
                TokenKind::Functions => {
                    self.cursor.advance()?;
                    let functions = self.functions(indent, &doc.name)?;
                    doc.functions.extend(functions);
                }
                TokenKind::Types => {
                    self.cursor.advance()?;
                    let types = self.types(indent)?;
                    doc.types.extend(types);
                }
                TokenKind::Text => {
                    let text = self.joined_text(indent)?;
                    append(&mut doc.description, &text, " ");
                }
                TokenKind::Outline if indent == base => break,
                TokenKind::Outline => {
                    let lexeme = self.cursor.advance()?;
                    debug!(indent, base, "nested document keyword");
                    return Err(Error::NestedDocument {
                        indent,
                        expected_indent: base,
                        position: lexeme.token.pos,
                    });
                }
                _ => break,
            }
        }

        trace!(
            name = %doc.name,
            functions = doc.functions.len(),
            types = doc.types.len(),
            "parsed document"
        );
        Ok(doc)
    }

    fn functions(&mut self, keyword_indent: usize, receiver: &str) -> Result<Vec<Function>> {
        let mut functions = Vec::new();
        while let Some(function) = self.function(keyword_indent + 1, receiver)? {
            functions.push(function);
        }
        Ok(functions)
    }

    fn function(&mut self, required: usize, receiver: &str) -> Result<Option<Function>> {
        let Some((signature, indent)) = self.text_at(required)? else {
            return Ok(None);
        };
        let mut function = Function::new(signature, receiver);

        loop {
            let (kind, next) = self.cursor.peek_kind()?;
            if kind == TokenKind::Eof || next <= indent {
                break;
            }
            match kind {
                TokenKind::Params => {
                    self.cursor.advance()?;
                    let params = self.params(next)?;
                    function.params.extend(params);
                }
                TokenKind::Return => {
                    self.cursor.advance()?;
                    function.return_value = self.joined_text(next)?;
                }
                TokenKind::Examples => {
                    self.cursor.advance()?;
                    let examples = self.examples(next)?;
                    function.examples.extend(examples);
                }
                TokenKind::Text => {
                    let text = self.joined_text(next)?;
                    append(&mut function.description, &text, " ");
                }
                _ => break,
            }
        }
        Ok(Some(function))
    }

    fn params(&mut self, keyword_indent: usize) -> Result<Vec<Param>> {
        let mut params = Vec::new();
        while let Some((line, indent)) = self.text_at(keyword_indent + 1)? {
            let (name, type_name) = split_name_type(&line);
            params.push(Param {
                name,
                type_name,
                description: self.joined_text(indent + 1)?,
            });
        }
        Ok(params)
    }

    fn types(&mut self, keyword_indent: usize) -> Result<Vec<Type>> {
        let mut types = Vec::new();
        while let Some(t) = self.type_def(keyword_indent + 1)? {
            types.push(t);
        }
        Ok(types)
    }

    fn type_def(&mut self, required: usize) -> Result<Option<Type>> {
        let Some((name, indent)) = self.text_at(required)? else {
            return Ok(None);
        };
        let mut t = Type::new(name);

        loop {
            let (kind, next) = self.cursor.peek_kind()?;
            if kind == TokenKind::Eof || next <= indent {
                break;
            }
            match kind {
                TokenKind::Fields => {
                    self.cursor.advance()?;
                    let fields = self.fields(next)?;
                    t.fields.extend(fields);
                }
                TokenKind::Methods | TokenKind::Functions => {
                    self.cursor.advance()?;
                    let methods = self.functions(next, &t.name)?;
                    t.methods.extend(methods);
                }
                TokenKind::Operators => {
                    self.cursor.advance()?;
                    let operators = self.operators(next)?;
                    t.operators.extend(operators);
                }
                TokenKind::Text => {
                    let text = self.joined_text(next)?;
                    append(&mut t.description, &text, " ");
                }
                _ => {
                    let lexeme = self.cursor.advance()?;
                    debug!(%kind, next, indent, "unexpected token in type body");
                    return Err(Error::UnexpectedToken {
                        kind,
                        text: lexeme.token.text,
                        indent: next,
                        expected_indent: indent,
                        position: lexeme.token.pos,
                    });
                }
            }
        }
        Ok(Some(t))
    }

    fn fields(&mut self, keyword_indent: usize) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        while let Some((line, indent)) = self.text_at(keyword_indent + 1)? {
            let (name, type_name) = split_name_type(&line);
            fields.push(Field {
                name,
                type_name,
                description: self.joined_text(indent + 1)?,
            });
        }
        Ok(fields)
    }

    fn operators(&mut self, keyword_indent: usize) -> Result<Vec<Operator>> {
        let mut operators = Vec::new();
        while let Some((expression, indent)) = self.text_at(keyword_indent + 1)? {
            operators.push(Operator {
                expression,
                description: self.joined_text(indent + 1)?,
            });
        }
        Ok(operators)
    }

    fn examples(&mut self, keyword_indent: usize) -> Result<Vec<Example>> {
        let mut examples = Vec::new();
        while let Some(example) = self.example(keyword_indent + 1)? {
            examples.push(example);
        }
        Ok(examples)
    }

    fn example(&mut self, required: usize) -> Result<Option<Example>> {
        let Some((name, indent)) = self.text_at(required)? else {
            return Ok(None);
        };
        let mut example = Example {
            name,
            ..Default::default()
        };

        loop {
            let (kind, next) = self.cursor.peek_kind()?;
            if kind == TokenKind::Eof || next <= indent {
                break;
            }
            match kind {
                TokenKind::Code => {
                    let keyword = self.cursor.advance()?;
                    let code = self.code_block(next, keyword.token.pos.line)?;
                    append(&mut example.code, &code, "\n");
                }
                TokenKind::Text => {
                    let text = self.text_block(next)?;
                    append(&mut example.description, &text, "\n");
                }
                _ => break,
            }
        }
        Ok(Some(example))
    }

    /// Body of a `code:` keyword: text on the keyword's own line, then a
    /// text block indented below it.
    fn code_block(&mut self, keyword_indent: usize, keyword_line: usize) -> Result<String> {
        let mut code = String::new();
        let same_line = {
            let lexeme = self.cursor.peek()?;
            lexeme.token.kind == TokenKind::Text && lexeme.token.pos.line == keyword_line
        };
        if same_line {
            code = self.cursor.advance()?.token.text;
        }
        let block = self.text_block(keyword_indent + 1)?;
        append(&mut code, &block, "\n");
        Ok(code)
    }

    /// Consume the next lexeme if it is text at `required` indent or deeper.
    fn text_at(&mut self, required: usize) -> Result<Option<(String, usize)>> {
        let (kind, indent) = self.cursor.peek_kind()?;
        if kind != TokenKind::Text || indent < required {
            return Ok(None);
        }
        let lexeme = self.cursor.advance()?;
        Ok(Some((lexeme.token.text, lexeme.indent)))
    }

    fn single_text(&mut self, required: usize) -> Result<Option<String>> {
        Ok(self.text_at(required)?.map(|(text, _)| text))
    }

    /// Consecutive text at `base` indent or deeper, joined with spaces.
    fn joined_text(&mut self, base: usize) -> Result<String> {
        let mut text = String::new();
        while let Some((line, _)) = self.text_at(base)? {
            append(&mut text, &line, " ");
        }
        Ok(text)
    }

    /// Consecutive text at `base` indent or deeper, keeping line structure.
    ///
    /// Blank lines inside the block are kept, and lines nested deeper than the
    /// first one are re-indented with two spaces per extra level.
    fn text_block(&mut self, base: usize) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut floor = None;
        let mut last_line = None;

        loop {
            let (kind, indent) = self.cursor.peek_kind()?;
            if kind != TokenKind::Text || indent < base {
                break;
            }
            let lexeme = self.cursor.advance()?;
            let line = lexeme.token.pos.line;
            if let Some(prev) = last_line {
                for _ in prev + 1..line {
                    lines.push(String::new());
                }
            }
            last_line = Some(line);

            let floor = *floor.get_or_insert(indent);
            let depth = indent.saturating_sub(floor);
            lines.push(format!("{}{}", "  ".repeat(depth), lexeme.token.text));
        }
        Ok(lines.join("\n"))
    }
}

impl<R: BufRead> Iterator for Parser<R> {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.parse_one() {
            Ok(Some(doc)) => Some(Ok(doc)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Split a `name type` line on single spaces.
///
/// Only the first two segments are used; anything after the type is dropped.
fn split_name_type(line: &str) -> (String, String) {
    let mut parts = line.split(' ');
    let name = parts.next().unwrap_or_default().to_string();
    let type_name = parts.next().unwrap_or_default().to_string();
    (name, type_name)
}

fn append(dest: &mut String, text: &str, sep: &str) {
    if text.is_empty() {
        return;
    }
    if !dest.is_empty() {
        dest.push_str(sep);
    }
    dest.push_str(text);
}
