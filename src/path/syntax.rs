//! Lexical layer for SVG path data.
//!
//! `PathSyntax` is a cursor over a path-data string which yields command
//! letters and numbers on demand. Callers which know the grammar of the
//! command being read (e.g. arc flags, which may be packed together as in
//! `a5 5 0 01 10 10`) drive it with `read_number()` / `read_flag()`;
//! generic consumers iterate it as a stream of `Token`s.

use crate::errors::{Error, Result};

const COMMANDS: &str = "MmLlHhVvCcSsQqTtAaZz";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Command(char),
    Number(f64),
}

/// A command letter or number, with its byte offset in the source string
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn is_command(&self) -> bool {
        matches!(self.kind, TokenKind::Command(_))
    }

    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            TokenKind::Command(_) => None,
        }
    }
}

pub struct PathSyntax<'a> {
    data: &'a str,
    index: usize,
    failed: bool,
}

impl<'a> PathSyntax<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            index: 0,
            failed: false,
        }
    }

    /// Byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.index
    }

    fn current(&self) -> Option<char> {
        self.data[self.index..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.index += c.len_utf8();
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    /// Skip any run of whitespace and commas
    pub fn skip_wsp_comma(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while let Some(c) = self.current() {
            if c.is_ascii_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// The source text at `offset` up to the next separator, for error messages
    pub fn snippet(&self, offset: usize) -> &'a str {
        let rest = &self.data[offset.min(self.data.len())..];
        let end = rest
            .char_indices()
            .find(|&(i, c)| c.is_ascii_whitespace() || c == ',' || (i > 0 && COMMANDS.contains(c)))
            .map_or(rest.len(), |(i, _)| i);
        let snippet = &rest[..end];
        match snippet.char_indices().nth(16) {
            Some((i, _)) => &snippet[..i],
            None => snippet,
        }
    }

    fn found(&self) -> String {
        if self.at_end() {
            "end of data".to_string()
        } else {
            format!("'{}'", self.snippet(self.index))
        }
    }

    /// Skip separators; return the command letter at the cursor without consuming it
    pub fn peek_command(&mut self) -> Option<char> {
        self.skip_wsp_comma();
        self.current().filter(|&c| COMMANDS.contains(c))
    }

    pub fn read_command(&mut self) -> Result<char> {
        match self.peek_command() {
            Some(c) => {
                self.advance();
                Ok(c)
            }
            None => Err(Error::parse(
                format!("expected path command, found {}", self.found()),
                self.index,
            )),
        }
    }

    /// Read a single-digit arc flag; '0' and '1' are the only valid values,
    /// and need no separator from whatever follows.
    pub fn read_flag(&mut self) -> Result<bool> {
        self.skip_wsp_comma();
        let res = match self.current() {
            Some('0') => false,
            Some('1') => true,
            _ => {
                return Err(Error::parse(
                    format!("expected arc flag (0 or 1), found {}", self.found()),
                    self.index,
                ))
            }
        };
        self.advance();
        Ok(res)
    }

    /// Read a number: optional sign, digits with optional decimal point, optional
    /// exponent. Reads as little as is needed, so `1.5.5-2` is `1.5`, `.5`, `-2`.
    pub fn read_number(&mut self) -> Result<f64> {
        self.skip_wsp_comma();
        let start = self.index;
        match self.current() {
            Some('+' | '-' | '.' | '0'..='9') => {}
            _ => {
                return Err(Error::parse(
                    format!("expected number, found {}", self.found()),
                    start,
                ))
            }
        }
        if let Some('+' | '-') = self.current() {
            self.advance();
        }
        let mut digits = 0;
        let mut dot_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => digits += 1,
                '.' if dot_valid => dot_valid = false,
                _ => break,
            }
            self.advance();
        }
        if digits == 0 {
            return Err(Error::parse(
                format!("invalid number '{}'", &self.data[start..self.index]),
                start,
            ));
        }
        if let Some('e' | 'E') = self.current() {
            self.advance();
            // include sign character if present
            if let Some('+' | '-') = self.current() {
                self.advance();
            }
            let exp_start = self.index;
            while let Some('0'..='9') = self.current() {
                self.advance();
            }
            if self.index == exp_start {
                return Err(Error::parse(
                    format!("invalid number '{}'", &self.data[start..self.index]),
                    start,
                ));
            }
        }
        let text = &self.data[start..self.index];
        let value: f64 = text
            .parse()
            .map_err(|_| Error::parse(format!("invalid number '{text}'"), start))?;
        if !value.is_finite() {
            return Err(Error::parse(
                format!("number out of range '{text}'"),
                start,
            ));
        }
        Ok(value)
    }

    pub fn read_coord(&mut self) -> Result<(f64, f64)> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok((x, y))
    }

    /// Read whichever token comes next; `None` at end of data
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_wsp_comma();
        let offset = self.index;
        match self.current() {
            None => Ok(None),
            Some(c) if COMMANDS.contains(c) => {
                self.advance();
                Ok(Some(Token {
                    kind: TokenKind::Command(c),
                    offset,
                }))
            }
            Some('+' | '-' | '.' | '0'..='9') => Ok(Some(Token {
                kind: TokenKind::Number(self.read_number()?),
                offset,
            })),
            Some(_) => Err(Error::parse(
                format!("unexpected character {}", self.found()),
                offset,
            )),
        }
    }
}

impl Iterator for PathSyntax<'_> {
    type Item = Result<Token>;

    /// Yields tokens until the end of data or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.next_token();
        if res.is_err() {
            self.failed = true;
        }
        res.transpose()
    }
}

/// Split path data into command letters and numbers.
pub fn tokenize(data: &str) -> Result<Vec<Token>> {
    PathSyntax::new(data).collect()
}
