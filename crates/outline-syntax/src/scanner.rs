//! Character-level tokenizer for outline notation.
//!
//! The scanner pulls one line at a time from a [`BufRead`] and hands out
//! characters from it, so input is consumed incrementally. Indentation is
//! resolved here: a tab or two consecutive spaces at the start of a token
//! become a [`TokenKind::Indent`]. Keywords are recognized when the text
//! buffer, exactly, is a keyword and the next character is `:`.
//!
//! Scanning never fails on malformed notation; anything unrecognized is text.
//! The only error is a failure of the underlying reader.

use crate::token::{Position, Token, TokenKind};
use std::io::{self, BufRead};

/// Tokenizes an input stream.
pub struct Scanner<R> {
    reader: R,
    line_buf: String,
    cursor: usize,
    text: String,
    /// Token owed to the next call (newline after text, or eof).
    queued: Option<Token>,
    finished: bool,
    pos: Position,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: String::new(),
            cursor: 0,
            text: String::new(),
            queued: None,
            finished: false,
            pos: Position::default(),
        }
    }

    /// Current read position.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Read one token from the input stream.
    ///
    /// Once [`TokenKind::Eof`] has been returned every later call returns it again.
    pub fn scan(&mut self) -> io::Result<Token> {
        if let Some(tok) = self.queued.take() {
            if tok.is_eof() {
                self.finished = true;
            }
            return Ok(tok);
        }
        if self.finished {
            return Ok(Token::new(TokenKind::Eof, "", self.pos));
        }

        self.text.clear();
        let mut in_text = false;
        let start = self.pos;

        loop {
            let here = self.pos;
            let Some(ch) = self.read()? else {
                let eof = Token::new(TokenKind::Eof, "", self.pos);
                if in_text {
                    self.queued = Some(eof);
                    return Ok(self.text_token(start));
                }
                self.finished = true;
                return Ok(eof);
            };

            match ch {
                '\r' => continue,
                '\n' => {
                    let newline = Token::new(TokenKind::Newline, "", here);
                    if in_text {
                        self.queued = Some(newline);
                        return Ok(self.text_token(start));
                    }
                    return Ok(newline);
                }
                '\t' if !in_text => return Ok(Token::new(TokenKind::Indent, "", here)),
                ':' => match TokenKind::keyword(&self.text) {
                    Some(kind) => return Ok(Token::new(kind, kind.as_str(), start)),
                    None => {
                        self.text.push(':');
                        in_text = true;
                    }
                },
                ' ' => {
                    self.text.push(' ');
                    if self.text == "  " {
                        return Ok(Token::new(TokenKind::Indent, "", start));
                    }
                }
                _ => {
                    self.text.push(ch);
                    in_text = true;
                }
            }
        }
    }

    fn text_token(&self, start: Position) -> Token {
        Token::new(TokenKind::Text, self.text.trim(), start)
    }

    /// Next character, refilling the line buffer from the reader as needed.
    fn read(&mut self) -> io::Result<Option<char>> {
        if self.cursor >= self.line_buf.len() {
            self.line_buf.clear();
            self.cursor = 0;
            if self.reader.read_line(&mut self.line_buf)? == 0 {
                return Ok(None);
            }
        }
        let Some(ch) = self.line_buf[self.cursor..].chars().next() else {
            return Ok(None);
        };
        self.cursor += ch.len_utf8();
        self.pos.offset += ch.len_utf8();
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.col = 0;
        } else {
            self.pos.col += 1;
        }
        Ok(Some(ch))
    }
}
