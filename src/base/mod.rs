//! Foundation types for the grammar reader.
//!
//! This module provides the source-position vocabulary shared by both parsers:
//! - [`Position`], [`Span`] - Offset plus line/column positions for tree nodes
//! - [`SourceLocation`] - A span tied to the file it came from
//! - [`LineIndex`] - Byte offset to line/column conversion
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, SourceLocation, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
