//! Token kinds produced by the scanner.

use std::fmt;

/// Location of a token within the scanned stream.
///
/// `line` and `col` are zero-based; `offset` counts bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

/// Every kind of token the outline lexicon knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// One tab, or two consecutive spaces.
    Indent,
    /// A line break.
    Newline,
    /// Arbitrary text, trimmed.
    Text,

    // -- keywords (text immediately followed by ':') --
    Outline,
    Path,
    Functions,
    Methods,
    Types,
    Fields,
    Operators,
    Params,
    Return,
    Examples,
    Code,
}

/// Keyword text → token kind.
static KEYWORDS: &[(&str, TokenKind)] = &[
    ("path", TokenKind::Path),
    ("outline", TokenKind::Outline),
    ("functions", TokenKind::Functions),
    ("methods", TokenKind::Methods),
    ("types", TokenKind::Types),
    ("fields", TokenKind::Fields),
    ("operators", TokenKind::Operators),
    ("params", TokenKind::Params),
    ("return", TokenKind::Return),
    ("examples", TokenKind::Examples),
    ("code", TokenKind::Code),
];

impl TokenKind {
    /// Look up the keyword spelled exactly `text` (case-sensitive).
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|(_, kind)| *kind)
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Indent => "indent",
            TokenKind::Newline => "newline",
            TokenKind::Text => "text",
            TokenKind::Outline => "outline",
            TokenKind::Path => "path",
            TokenKind::Functions => "functions",
            TokenKind::Methods => "methods",
            TokenKind::Types => "types",
            TokenKind::Fields => "fields",
            TokenKind::Operators => "operators",
            TokenKind::Params => "params",
            TokenKind::Return => "return",
            TokenKind::Examples => "examples",
            TokenKind::Code => "code",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized token with its (trimmed) text and start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
