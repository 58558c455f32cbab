use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use super::RawValue;
use crate::parser::GrammarFormat;

/// A fully parsed grammar file, ready to hand to a grammar compiler.
///
/// Only `root` describes the grammar; `path` and `format` record where it was
/// read from and are never part of the serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGrammar {
    root: RawValue,
    path: PathBuf,
    format: GrammarFormat,
}

impl RawGrammar {
    pub fn new(root: RawValue, path: impl Into<PathBuf>, format: GrammarFormat) -> Self {
        Self {
            root,
            path: path.into(),
            format,
        }
    }

    pub fn root(&self) -> &RawValue {
        &self.root
    }

    pub fn into_root(self) -> RawValue {
        self.root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> GrammarFormat {
        self.format
    }

    /// The `scopeName` entry, if the root is a dictionary that has one.
    pub fn scope_name(&self) -> Option<&str> {
        self.root.get("scopeName").and_then(RawValue::as_str)
    }

    /// Wire form of the document; see [`RawValue::to_json`].
    pub fn to_json(&self, with_locations: bool) -> serde_json::Value {
        self.root.to_json(with_locations)
    }
}

impl Serialize for RawGrammar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
