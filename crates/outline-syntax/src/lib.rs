//! Parser for outline documentation notation.
//!
//! Outline is a whitespace-structured notation describing documents made of
//! functions, types, fields, methods, operators, parameters and examples,
//! nested by indentation (one tab, or two spaces, per level):
//!
//! ```text
//! outline: twoFuncs
//!   path: twoFuncs
//!   functions:
//!     difference(a,b int) int
//!     sum(a,b int) int
//!       add two things together
//! ```
//!
//! [`parse`] turns text into a [`Docs`] collection; [`Document::marshal_indent`]
//! turns a document back into canonical text.

pub mod error;
pub mod merge;
pub mod model;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod serialize;
pub mod token;

pub use error::{Error, Result};
pub use merge::merge_by_name;
pub use model::{Docs, Document, Example, Field, Function, Operator, Param, Type};
pub use options::ParseOptions;
pub use parser::{parse, parse_first, parse_str, Parser};
pub use scanner::Scanner;
pub use serialize::marshal_indent;
pub use token::{Position, Token, TokenKind};
