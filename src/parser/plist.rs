//! XML property-list grammar parsing.
//!
//! ## Plist Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
//! <plist version="1.0">
//!   <dict>
//!     <key>scopeName</key>
//!     <string>source.rust</string>
//!     <key>patterns</key>
//!     <array/>
//!   </dict>
//! </plist>
//! ```
//!
//! Containers map to [`RawDict`]/[`RawArray`]. `string`, `date` and `data`
//! become strings, `integer`/`real` become numbers and `true`/`false` become
//! booleans. Any other element in value position is rejected.

use std::path::Path;
use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::base::{LineIndex, SourceLocation, Span};
use crate::value::{LOCATION_KEY, RawArray, RawDict, RawValue};

use super::{GrammarFormat, ParseError};

/// Parse property-list grammar text.
pub fn parse(text: &str, path: &Path, capture_metadata: bool) -> Result<RawValue, ParseError> {
    PlistReader::new(text, path, capture_metadata).read()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafKind {
    String,
    Integer,
    Real,
    Date,
    Data,
    True,
    False,
}

impl LeafKind {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "string" => Self::String,
            "integer" => Self::Integer,
            "real" => Self::Real,
            "date" => Self::Date,
            "data" => Self::Data,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Date => "date",
            Self::Data => "data",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

/// Open element on the reader's stack.
#[derive(Debug)]
enum Frame {
    /// The `<plist>` wrapper, transparent for values.
    Plist,
    Dict {
        dict: RawDict,
        /// Key waiting for its value.
        key: Option<String>,
        start: usize,
    },
    Array {
        array: RawArray,
        start: usize,
    },
    Key {
        text: String,
    },
    Leaf {
        kind: LeafKind,
        text: String,
        start: usize,
    },
}

impl Frame {
    fn describe(&self) -> &'static str {
        match self {
            Self::Plist => "plist",
            Self::Dict { .. } => "dict",
            Self::Array { .. } => "array",
            Self::Key { .. } => "key",
            Self::Leaf { kind, .. } => kind.name(),
        }
    }
}

/// Event-driven plist reader.
struct PlistReader<'a> {
    text: &'a str,
    index: LineIndex<'a>,
    file: Arc<str>,
    capture_metadata: bool,
    stack: Vec<Frame>,
    root: Option<RawValue>,
}

impl<'a> PlistReader<'a> {
    fn new(text: &'a str, path: &Path, capture_metadata: bool) -> Self {
        Self {
            text,
            index: LineIndex::new(text),
            file: Arc::from(path.to_string_lossy().as_ref()),
            capture_metadata,
            stack: Vec::new(),
            root: None,
        }
    }

    fn read(mut self) -> Result<RawValue, ParseError> {
        let mut reader = Reader::from_str(self.text);
        reader.config_mut().trim_text(false);

        loop {
            let before = reader.buffer_position() as usize;
            let event = reader
                .read_event()
                .map_err(|e| self.malformed(reader.error_position() as usize, e.to_string()))?;
            let after = reader.buffer_position() as usize;

            match event {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.open(&name, self.tag_start(before))?;
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.empty(&name, self.tag_start(before), after)?;
                }
                Event::End(_) => self.close(before, after)?,
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| self.malformed(before, e.to_string()))?;
                    self.text(&text, before)?;
                }
                Event::CData(c) => {
                    let raw = c.into_inner();
                    self.text(&String::from_utf8_lossy(&raw), before)?;
                }
                Event::Eof => break,
                // Declarations, doctype, comments and processing instructions
                _ => {}
            }
        }

        if let Some(frame) = self.stack.last() {
            let message = format!("unexpected end of document inside <{}>", frame.describe());
            return Err(self.malformed(self.text.len(), message));
        }
        match self.root.take() {
            Some(root) => Ok(root),
            None => Err(self.malformed(self.text.len(), "document contains no value")),
        }
    }

    fn open(&mut self, name: &str, start: usize) -> Result<(), ParseError> {
        self.check_not_in_text(name, start)?;
        match name {
            "plist" => {
                if !self.stack.is_empty() || self.root.is_some() {
                    return Err(self.malformed(start, "unexpected <plist>"));
                }
                self.stack.push(Frame::Plist);
            }
            "key" => {
                self.check_key_position(start)?;
                self.stack.push(Frame::Key {
                    text: String::new(),
                });
            }
            "dict" => {
                self.check_value_position(start)?;
                self.stack.push(Frame::Dict {
                    dict: RawDict::new(),
                    key: None,
                    start,
                });
            }
            "array" => {
                self.check_value_position(start)?;
                self.stack.push(Frame::Array {
                    array: RawArray::new(),
                    start,
                });
            }
            _ => {
                let kind = self.leaf_kind(name, start)?;
                self.check_value_position(start)?;
                self.stack.push(Frame::Leaf {
                    kind,
                    text: String::new(),
                    start,
                });
            }
        }
        Ok(())
    }

    fn empty(&mut self, name: &str, start: usize, end: usize) -> Result<(), ParseError> {
        self.check_not_in_text(name, start)?;
        match name {
            "plist" => {
                if !self.stack.is_empty() || self.root.is_some() {
                    return Err(self.malformed(start, "unexpected <plist>"));
                }
                Ok(())
            }
            "key" => {
                self.check_key_position(start)?;
                self.set_key(String::new(), start)
            }
            "dict" => {
                self.check_value_position(start)?;
                let mut dict = RawDict::new();
                dict.set_location(self.location(start, end));
                self.complete(RawValue::Dict(dict), start)
            }
            "array" => {
                self.check_value_position(start)?;
                let mut array = RawArray::new();
                array.set_location(self.location(start, end));
                self.complete(RawValue::Array(array), start)
            }
            _ => {
                let kind = self.leaf_kind(name, start)?;
                self.check_value_position(start)?;
                let value = self.leaf_value(kind, "", start)?;
                self.complete(value, start)
            }
        }
    }

    fn close(&mut self, start: usize, end: usize) -> Result<(), ParseError> {
        let Some(frame) = self.stack.pop() else {
            return Err(self.malformed(start, "unexpected closing tag"));
        };
        match frame {
            Frame::Plist => Ok(()),
            Frame::Dict {
                mut dict,
                key,
                start: open,
            } => {
                if let Some(key) = key {
                    return Err(self.malformed(start, format!("missing value for key `{key}`")));
                }
                dict.set_location(self.location(open, end));
                self.complete(RawValue::Dict(dict), open)
            }
            Frame::Array {
                mut array,
                start: open,
            } => {
                array.set_location(self.location(open, end));
                self.complete(RawValue::Array(array), open)
            }
            Frame::Key { text } => self.set_key(text, start),
            Frame::Leaf {
                kind,
                text,
                start: open,
            } => {
                let value = self.leaf_value(kind, &text, open)?;
                self.complete(value, open)
            }
        }
    }

    fn text(&mut self, text: &str, at: usize) -> Result<(), ParseError> {
        if let Some(Frame::Key { text: buf } | Frame::Leaf { text: buf, .. }) = self.stack.last_mut() {
            buf.push_str(text);
            return Ok(());
        }
        if text.trim().is_empty() {
            Ok(())
        } else {
            Err(self.malformed(at, "unexpected text outside of a value"))
        }
    }

    /// Attach a finished value to its parent, or make it the document root.
    fn complete(&mut self, value: RawValue, at: usize) -> Result<(), ParseError> {
        match self.stack.last_mut() {
            Some(Frame::Dict { dict, key, .. }) => match key.take() {
                Some(key) => {
                    dict.insert(key, value);
                    Ok(())
                }
                None => Err(self.malformed(at, "missing <key> before value")),
            },
            Some(Frame::Array { array, .. }) => {
                array.push(value);
                Ok(())
            }
            Some(Frame::Plist) | None => {
                if self.root.is_some() {
                    return Err(self.malformed(at, "multiple root values"));
                }
                self.root = Some(value);
                Ok(())
            }
            Some(other) => {
                let message = format!("value inside <{}>", other.describe());
                Err(self.malformed(at, message))
            }
        }
    }

    fn set_key(&mut self, text: String, at: usize) -> Result<(), ParseError> {
        if self.capture_metadata && text == LOCATION_KEY {
            return Err(self.malformed(at, format!("reserved key `{LOCATION_KEY}`")));
        }
        match self.stack.last_mut() {
            Some(Frame::Dict { key, .. }) => {
                *key = Some(text);
                Ok(())
            }
            _ => Err(self.malformed(at, "<key> outside of <dict>")),
        }
    }

    fn check_not_in_text(&self, name: &str, at: usize) -> Result<(), ParseError> {
        match self.stack.last() {
            Some(frame @ (Frame::Key { .. } | Frame::Leaf { .. })) => {
                let message = format!("unexpected <{name}> inside <{}>", frame.describe());
                Err(self.malformed(at, message))
            }
            _ => Ok(()),
        }
    }

    fn check_key_position(&self, at: usize) -> Result<(), ParseError> {
        match self.stack.last() {
            Some(Frame::Dict { key: None, .. }) => Ok(()),
            Some(Frame::Dict { key: Some(key), .. }) => {
                Err(self.malformed(at, format!("missing value for key `{key}`")))
            }
            _ => Err(self.malformed(at, "<key> outside of <dict>")),
        }
    }

    fn check_value_position(&self, at: usize) -> Result<(), ParseError> {
        match self.stack.last() {
            Some(Frame::Dict { key: None, .. }) => Err(self.malformed(at, "missing <key> before value")),
            Some(Frame::Plist) | None if self.root.is_some() => {
                Err(self.malformed(at, "multiple root values"))
            }
            _ => Ok(()),
        }
    }

    fn leaf_kind(&self, name: &str, at: usize) -> Result<LeafKind, ParseError> {
        LeafKind::from_name(name).ok_or_else(|| {
            let pos = self.index.position(at);
            ParseError::unsupported(name, pos.line + 1, pos.column + 1)
        })
    }

    fn leaf_value(&self, kind: LeafKind, text: &str, at: usize) -> Result<RawValue, ParseError> {
        Ok(match kind {
            LeafKind::String | LeafKind::Date => RawValue::String(text.to_string()),
            LeafKind::Data => RawValue::String(text.chars().filter(|c| !c.is_whitespace()).collect()),
            LeafKind::True => RawValue::Bool(true),
            LeafKind::False => RawValue::Bool(false),
            LeafKind::Integer => integer_value(text.trim())
                .ok_or_else(|| self.malformed(at, format!("invalid integer `{}`", text.trim())))?,
            LeafKind::Real => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(RawValue::Real)
                .ok_or_else(|| self.malformed(at, format!("invalid real `{}`", text.trim())))?,
        })
    }

    /// Offset of the `<` that opens the tag read from `pos`.
    fn tag_start(&self, pos: usize) -> usize {
        let bytes = self.text.as_bytes();
        match bytes.get(pos) {
            Some(b'<') => pos,
            _ if pos > 0 && bytes.get(pos - 1) == Some(&b'<') => pos - 1,
            _ => pos,
        }
    }

    fn location(&self, start: usize, end: usize) -> Option<SourceLocation> {
        self.capture_metadata.then(|| {
            SourceLocation::new(
                self.file.clone(),
                Span::new(self.index.position(start), self.index.position(end)),
            )
        })
    }

    fn malformed(&self, offset: usize, message: impl Into<String>) -> ParseError {
        let pos = self.index.position(offset);
        ParseError::malformed(GrammarFormat::Plist, message, pos.line + 1, pos.column + 1)
    }
}

/// Map integer text the way JSON integer literals are mapped: `i64` when it
/// fits, `Real` otherwise, and `-0` as negative zero.
fn integer_value(text: &str) -> Option<RawValue> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Ok(i) = text.parse::<i64>() {
        return Some(if i == 0 && text.starts_with('-') {
            RawValue::Real(-0.0)
        } else {
            RawValue::Integer(i)
        });
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(RawValue::Real(u as f64));
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(RawValue::Real)
}
