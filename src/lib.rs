//! # grammar-reader
//!
//! Loads TextMate-style syntax grammars from disk into a format-independent
//! raw value tree, ready for a grammar compiler.
//!
//! Grammars come in two serializations: JSON (`*.json`) and XML property
//! lists (`*.tmLanguage`, `*.plist`, or anything else). The format is chosen
//! from the file name, and both produce the same [`RawValue`] shape.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! loader    → Blocking and non-blocking readers, error context
//!   ↓
//! config    → Process-wide metadata-capture flag
//!   ↓
//! parser    → Format selection, JSON and plist parsers
//!   ↓
//! value     → RawValue / RawDict / RawArray / RawGrammar
//!   ↓
//! base      → Position, Span, SourceLocation, LineIndex
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use grammar_reader::{read_grammar_sync, LoadPhase};
//!
//! match read_grammar_sync("syntaxes/rust.tmLanguage.json") {
//!     Ok(grammar) => println!("loaded {:?}", grammar.scope_name()),
//!     Err(e) if e.phase() == LoadPhase::Reading => eprintln!("missing file: {e}"),
//!     Err(e) => eprintln!("bad grammar: {e}"),
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → value → parser → config → loader)
// ============================================================================

/// Foundation types: Position, Span, SourceLocation, LineIndex
pub mod base;

/// Raw grammar value tree
pub mod value;

/// Format selection and the two grammar parsers
pub mod parser;

/// Loader configuration
pub mod config;

/// Blocking and non-blocking grammar loading
pub mod loader;

// Re-export commonly needed items
pub use base::{Position, SourceLocation, Span};
pub use config::LoaderConfig;
pub use loader::{
    LoadError, LoadPhase, SourceError, SyncGrammarReader, read_grammar_sync,
    read_grammar_sync_with,
};
#[cfg(feature = "async")]
pub use loader::{AsyncGrammarReader, read_grammar, read_grammar_with};
pub use parser::{GrammarFormat, ParseError, parse_grammar};
pub use value::{LOCATION_KEY, RawArray, RawDict, RawGrammar, RawValue};
