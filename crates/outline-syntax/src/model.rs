//! Document model produced by the parser, independent of any output format.

use crate::options::ParseOptions;
use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// One `outline:` block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    pub name: String,
    pub path: String,
    pub description: String,
    pub functions: Vec<Function>,
    pub types: Vec<Type>,
    /// Options the document was parsed with; consulted by [`Document::sort`].
    #[serde(skip)]
    pub options: ParseOptions,
}

// Options are parse-time configuration, not content.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.description == other.description
            && self.functions == other.functions
            && self.types == other.types
    }
}

impl Eq for Document {}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sort functions and types according to the document's options.
    pub fn sort(&mut self) {
        if self.options.sort_functions {
            sort_by_signature(&mut self.functions);
        }
        if self.options.sort_types {
            self.types.sort_by(|a, b| a.name.cmp(&b.name));
            for t in &mut self.types {
                t.sort();
            }
        }
    }

    /// Fold `other` into this document.
    ///
    /// Empty `description` and `path` are backfilled from `other`; its types
    /// and functions are appended as-is (no deduplication).
    pub fn merge(&mut self, other: Document) {
        if self.description.is_empty() {
            self.description = other.description;
        }
        if self.path.is_empty() {
            self.path = other.path;
        }
        self.types.extend(other.types);
        self.functions.extend(other.functions);
    }
}

/// A documented function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Identifier portion of the signature.
    pub function_name: String,
    /// Name of the owning document or type, set from parse context.
    pub receiver: String,
    pub signature: String,
    pub description: String,
    pub params: Vec<Param>,
    #[serde(rename = "return")]
    pub return_value: String,
    pub examples: Vec<Example>,
}

impl Function {
    pub fn new(signature: impl Into<String>, receiver: impl Into<String>) -> Self {
        let signature = signature.into();
        Self {
            function_name: function_name(&signature).to_string(),
            receiver: receiver.into(),
            signature,
            ..Default::default()
        }
    }
}

/// The part of a signature before its first `(`.
pub fn function_name(signature: &str) -> &str {
    signature
        .split_once('(')
        .map_or(signature, |(name, _)| name)
        .trim()
}

/// An argument to a function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// A constructed type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Type {
    pub name: String,
    pub description: String,
    pub methods: Vec<Function>,
    pub fields: Vec<Field>,
    pub operators: Vec<Operator>,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sort methods by signature.
    pub fn sort(&mut self) {
        sort_by_signature(&mut self.methods);
    }
}

/// A property of a [`Type`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// An operation a [`Type`] supports, e.g. `duration + time = time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub expression: String,
    pub description: String,
}

/// A named usage example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: String,
    pub code: String,
    pub description: String,
}

fn sort_by_signature(functions: &mut [Function]) {
    functions.sort_by(|a, b| a.signature.cmp(&b.signature));
}

/// An ordered collection of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Docs(pub Vec<Document>);

impl Docs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Document> {
        self.0
    }

    /// Sort every document's contents, then the documents by path + name.
    pub fn sort(&mut self) {
        for doc in &mut self.0 {
            doc.sort();
        }
        self.0.sort_by(|a, b| {
            let ka = a.path.bytes().chain(a.name.bytes());
            let kb = b.path.bytes().chain(b.name.bytes());
            ka.cmp(kb)
        });
    }

    /// Canonical text of every document, concatenated.
    pub fn marshal_indent(&self, depth: usize, indent: &str) -> String {
        self.0
            .iter()
            .map(|doc| doc.marshal_indent(depth, indent))
            .collect()
    }
}

impl Deref for Docs {
    type Target = Vec<Document>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Docs {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Document>> for Docs {
    fn from(docs: Vec<Document>) -> Self {
        Self(docs)
    }
}

impl FromIterator<Document> for Docs {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Docs {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Docs {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
