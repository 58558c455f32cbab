//! JSON grammar parsing.
//!
//! Without location capture the text goes straight through `serde_json` in
//! strict mode. With capture enabled a `logos` tokenizer drives the structure
//! so that every object and array can be given a span, while each string and
//! number token is still decoded by `serde_json` itself.

use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use logos::{Logos, SpannedIter};
use serde::de::DeserializeOwned;

use crate::base::{LineIndex, SourceLocation, Span};
use crate::value::{LOCATION_KEY, RawArray, RawDict, RawValue};

use super::error::json_message;
use super::{GrammarFormat, ParseError};

/// Nesting limit, matching serde_json's default recursion limit (at most
/// `MAX_DEPTH - 1` nested containers).
const MAX_DEPTH: usize = 128;

/// Parse JSON grammar text.
pub fn parse(text: &str, path: &Path, capture_metadata: bool) -> Result<RawValue, ParseError> {
    if capture_metadata {
        LocatedParser::new(text, path).parse_document()
    } else {
        serde_json::from_str(text).map_err(ParseError::from)
    }
}

/// JSON tokens. Leaf patterns are deliberately loose; `serde_json` has the
/// final word on what a valid string or number is.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum JsonToken {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,
}

impl JsonToken {
    fn describe(&self) -> &'static str {
        match self {
            Self::LBrace => "`{`",
            Self::RBrace => "`}`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::True | Self::False | Self::Null => "literal",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

/// Location-tracking JSON parser over the token stream.
struct LocatedParser<'a> {
    text: &'a str,
    tokens: SpannedIter<'a, JsonToken>,
    depth: usize,
    index: LineIndex<'a>,
    file: Arc<str>,
}

impl<'a> LocatedParser<'a> {
    fn new(text: &'a str, path: &Path) -> Self {
        Self {
            text,
            tokens: JsonToken::lexer(text).spanned(),
            depth: 0,
            index: LineIndex::new(text),
            file: Arc::from(path.to_string_lossy().as_ref()),
        }
    }

    fn parse_document(mut self) -> Result<RawValue, ParseError> {
        let value = self.parse_value()?;
        match self.tokens.next() {
            None => Ok(value),
            Some((_, span)) => Err(self.error_at(span.start, "trailing characters")),
        }
    }

    fn parse_value(&mut self) -> Result<RawValue, ParseError> {
        let (token, span) = self.token("a value")?;
        self.value_from(token, span)
    }

    fn value_from(&mut self, token: JsonToken, span: Range<usize>) -> Result<RawValue, ParseError> {
        match token {
            JsonToken::LBrace => self.parse_object(span.start),
            JsonToken::LBracket => self.parse_array(span.start),
            JsonToken::String
            | JsonToken::Number
            | JsonToken::True
            | JsonToken::False
            | JsonToken::Null => self.decode(&span),
            other => Err(self.error_at(
                span.start,
                format!("expected value, found {}", other.describe()),
            )),
        }
    }

    fn parse_object(&mut self, start: usize) -> Result<RawValue, ParseError> {
        self.enter(start)?;
        let mut dict = RawDict::new();

        let (mut token, mut span) = self.token("an object")?;
        if token != JsonToken::RBrace {
            loop {
                if token != JsonToken::String {
                    return Err(self.error_at(span.start, "key must be a string"));
                }
                let key: String = self.decode(&span)?;
                if key == LOCATION_KEY {
                    return Err(self.error_at(span.start, format!("reserved key `{LOCATION_KEY}`")));
                }

                let (colon, colon_span) = self.token("an object")?;
                if colon != JsonToken::Colon {
                    return Err(self.error_at(colon_span.start, "expected `:`"));
                }
                let value = self.parse_value()?;
                dict.insert(key, value);

                let (separator, separator_span) = self.token("an object")?;
                match separator {
                    JsonToken::Comma => (token, span) = self.token("an object")?,
                    JsonToken::RBrace => {
                        span = separator_span;
                        break;
                    }
                    _ => return Err(self.error_at(separator_span.start, "expected `,` or `}`")),
                }
            }
        }

        self.depth -= 1;
        dict.set_location(Some(self.location(start, span.end)));
        Ok(RawValue::Dict(dict))
    }

    fn parse_array(&mut self, start: usize) -> Result<RawValue, ParseError> {
        self.enter(start)?;
        let mut array = RawArray::new();

        let (mut token, mut span) = self.token("a list")?;
        if token != JsonToken::RBracket {
            loop {
                array.push(self.value_from(token, span)?);

                let (separator, separator_span) = self.token("a list")?;
                match separator {
                    JsonToken::Comma => (token, span) = self.token("a list")?,
                    JsonToken::RBracket => {
                        span = separator_span;
                        break;
                    }
                    _ => return Err(self.error_at(separator_span.start, "expected `,` or `]`")),
                }
            }
        }

        self.depth -= 1;
        array.set_location(Some(self.location(start, span.end)));
        Ok(RawValue::Array(array))
    }

    /// Next token, or an error naming what was being parsed.
    fn token(&mut self, parsing: &str) -> Result<(JsonToken, Range<usize>), ParseError> {
        match self.tokens.next() {
            Some((Ok(token), span)) => Ok((token, span)),
            Some((Err(()), span)) => Err(self.error_at(span.start, "invalid token")),
            None => Err(self.error_at(self.text.len(), format!("EOF while parsing {parsing}"))),
        }
    }

    /// Decode one leaf token with serde_json.
    fn decode<T: DeserializeOwned>(&self, span: &Range<usize>) -> Result<T, ParseError> {
        serde_json::from_str(&self.text[span.clone()])
            .map_err(|e| self.error_at(span.start, json_message(&e)))
    }

    fn enter(&mut self, at: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at(at, "recursion limit exceeded"));
        }
        Ok(())
    }

    fn location(&self, start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(
            self.file.clone(),
            Span::new(self.index.position(start), self.index.position(end)),
        )
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> ParseError {
        let pos = self.index.position(offset);
        ParseError::malformed(GrammarFormat::Json, message, pos.line + 1, pos.column + 1)
    }
}
