//! Position tracking for raw grammar nodes
//!
//! Stores where a dictionary or array started and ended in the source file so
//! that grammar diagnostics downstream can point back at the original text.

use std::fmt;
use std::sync::Arc;

use text_size::{TextRange, TextSize};

/// A position in source text (line and column are 0-indexed, column counts chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: TextSize,
    pub line: usize,
    pub column: usize,
}

/// A span between two positions, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A span in a named source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: Arc<str>,
    pub span: Span,
}

impl Position {
    pub fn new(offset: TextSize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Byte range covered by this span
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start.offset, self.end.offset)
    }

    /// Check if a byte offset falls within this span
    pub fn contains(&self, offset: TextSize) -> bool {
        self.range().contains(offset)
    }
}

impl SourceLocation {
    pub fn new(file: Arc<str>, span: Span) -> Self {
        Self { file, span }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file,
            self.span.start.line + 1,
            self.span.start.column + 1
        )
    }
}
