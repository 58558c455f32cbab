//! Error types for grammar parsing.

use thiserror::Error;

use super::GrammarFormat;

/// Errors produced while turning grammar text into a [`RawValue`](crate::RawValue) tree.
///
/// Line and column are 1-based, as reported by the underlying parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a well-formed document of its format.
    #[error("{format} syntax error at line {line} column {column}: {message}")]
    Malformed {
        format: GrammarFormat,
        message: String,
        line: usize,
        column: usize,
    },

    /// A property-list element with no primitive equivalent.
    #[error("unsupported property list value <{element}> at line {line} column {column}")]
    UnsupportedValueType {
        element: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// Create a malformed-document error.
    pub fn malformed(
        format: GrammarFormat,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Malformed {
            format,
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an unsupported-value error.
    pub fn unsupported(element: impl Into<String>, line: usize, column: usize) -> Self {
        Self::UnsupportedValueType {
            element: element.into(),
            line,
            column,
        }
    }

    /// 1-based line/column of the failure.
    pub fn line_col(&self) -> (usize, usize) {
        match self {
            Self::Malformed { line, column, .. } | Self::UnsupportedValueType { line, column, .. } => {
                (*line, *column)
            }
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValueType { .. })
    }
}

/// serde_json's message without the " at line L column C" suffix it appends
/// to its Display.
pub(crate) fn json_message(e: &serde_json::Error) -> String {
    let full = e.to_string();
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    match full.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => full,
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed(GrammarFormat::Json, json_message(&e), e.line(), e.column())
    }
}
