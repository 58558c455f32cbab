//! Error types for grammar loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Which step of a blocking load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    Reading,
    Parsing,
}

/// Errors from the blocking loader, tagged with the file and the phase.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Error reading {}: {source}.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but its contents did not parse.
    #[error("Error parsing {}: {source}.", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    pub fn phase(&self) -> LoadPhase {
        match self {
            Self::Read { .. } => LoadPhase::Reading,
            Self::Parse { .. } => LoadPhase::Parsing,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Errors from the non-blocking loader, passed through without path or
/// phase context.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}
