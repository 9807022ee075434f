//! JSON token source.
//!
//! The converter never sees JSON text: it pulls [`Token`]s one at a time from
//! a [`TokenSource`]. [`JsonTokenizer`] is the source used for real documents
//! and wraps the `json-event-parser` streaming parser, so nothing beyond the
//! current token is held in memory.

use crate::error::{Error, Result};
use json_event_parser::{JsonEvent, ReaderJsonParser, SliceJsonParser};
use std::borrow::Cow;
use std::io::Read;

/// A structural or scalar JSON event.
///
/// `Key`, `String` and `Number` carry the source text; strings and keys are
/// already unescaped, numbers are not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Key(Cow<'a, str>),
    String(Cow<'a, str>),
    Number(Cow<'a, str>),
    True,
    False,
    Null,
}

impl Token<'_> {
    /// Detach the token from the buffer it was read from.
    pub fn into_owned(self) -> Token<'static> {
        match self {
            Token::ObjectStart => Token::ObjectStart,
            Token::ObjectEnd => Token::ObjectEnd,
            Token::ArrayStart => Token::ArrayStart,
            Token::ArrayEnd => Token::ArrayEnd,
            Token::Key(k) => Token::Key(Cow::Owned(k.into_owned())),
            Token::String(s) => Token::String(Cow::Owned(s.into_owned())),
            Token::Number(n) => Token::Number(Cow::Owned(n.into_owned())),
            Token::True => Token::True,
            Token::False => Token::False,
            Token::Null => Token::Null,
        }
    }
}

/// A lazy, finite, forward-only sequence of tokens.
pub trait TokenSource {
    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Malformed input is reported as an error; callers must not pull again
    /// after an error.
    fn next_token(&mut self) -> Result<Option<Token<'_>>>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Result<Option<Token<'_>>> {
        (**self).next_token()
    }
}

impl TokenSource for std::vec::IntoIter<Token<'static>> {
    fn next_token(&mut self) -> Result<Option<Token<'_>>> {
        Ok(self.next())
    }
}

enum Parser<'a, R: Read> {
    Reader(ReaderJsonParser<R>),
    Slice(SliceJsonParser<'a>),
}

/// Streaming JSON tokenizer backed by `json-event-parser`.
pub struct JsonTokenizer<'a, R: Read = &'a [u8]> {
    parser: Parser<'a, R>,
    finished: bool,
}

impl<R: Read> JsonTokenizer<'static, R> {
    /// Tokenize a byte stream. Read failures are reported as [`Error::Json`].
    pub fn from_reader(reader: R) -> Self {
        Self { parser: Parser::Reader(ReaderJsonParser::new(reader)), finished: false }
    }
}

impl<'a> JsonTokenizer<'a, &'a [u8]> {
    /// Tokenize an in-memory UTF-8 document.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self { parser: Parser::Slice(SliceJsonParser::new(bytes)), finished: false }
    }
}

impl<R: Read> TokenSource for JsonTokenizer<'_, R> {
    fn next_token(&mut self) -> Result<Option<Token<'_>>> {
        if self.finished {
            return Ok(None);
        }
        let event = match &mut self.parser {
            Parser::Reader(parser) => parser.parse_next().map_err(Error::from)?,
            Parser::Slice(parser) => parser.parse_next().map_err(Error::from)?,
        };
        let token = match event {
            JsonEvent::StartObject => Token::ObjectStart,
            JsonEvent::EndObject => Token::ObjectEnd,
            JsonEvent::StartArray => Token::ArrayStart,
            JsonEvent::EndArray => Token::ArrayEnd,
            JsonEvent::ObjectKey(key) => Token::Key(key),
            JsonEvent::String(value) => Token::String(value),
            JsonEvent::Number(value) => Token::Number(value),
            JsonEvent::Boolean(true) => Token::True,
            JsonEvent::Boolean(false) => Token::False,
            JsonEvent::Null => Token::Null,
            JsonEvent::Eof => {
                self.finished = true;
                return Ok(None);
            }
        };
        Ok(Some(token))
    }
}
