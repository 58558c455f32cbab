//! Grammar parsers for the two supported serializations.
//!
//! ## Architecture
//!
//! ```text
//! path ──► GrammarFormat::from_path ──► Json | Plist
//!                                          │
//! text ──► parse_grammar(format, text, path, capture)
//!                                          │
//!            ┌─────────────────────────────┴──────────────────────────┐
//!            ▼                                                        ▼
//!   json::parse                                             plist::parse
//!     capture off: serde_json (strict)                        quick-xml event reader
//!     capture on:  logos tokens, serde_json leaves            (+ container spans)
//!            └─────────────────────────────┬──────────────────────────┘
//!                                          ▼
//!                                       RawValue
//! ```
//!
//! Both paths yield the same tree for equivalent input. Location capture only
//! fills the typed `location` field of dictionaries and arrays.

mod error;
pub mod json;
pub mod plist;

pub use error::ParseError;

use std::fmt;
use std::path::Path;

use crate::value::RawValue;

/// Which serialization a grammar file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarFormat {
    /// Structured text (`*.json`)
    Json,
    /// XML property list (`*.tmLanguage`, `*.plist`, anything else)
    Plist,
}

impl GrammarFormat {
    /// Select the parser for a path.
    ///
    /// A final path segment ending in `.json` (case-sensitive) selects JSON;
    /// every other path, including one without an extension, selects plist.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(".json"));
        let format = if is_json { Self::Json } else { Self::Plist };
        tracing::trace!("Selected {} parser for {}", format, path.display());
        format
    }

    /// Human-readable name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Plist => "plist",
        }
    }

    /// Parse `text` in this format. `path` is used only to label locations.
    pub fn parse(&self, text: &str, path: &Path, capture_metadata: bool) -> Result<RawValue, ParseError> {
        match self {
            Self::Json => json::parse(text, path, capture_metadata),
            Self::Plist => plist::parse(text, path, capture_metadata),
        }
    }
}

impl fmt::Display for GrammarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse grammar text with an explicitly chosen format.
pub fn parse_grammar(
    format: GrammarFormat,
    text: &str,
    path: &Path,
    capture_metadata: bool,
) -> Result<RawValue, ParseError> {
    format.parse(text, path, capture_metadata)
}
