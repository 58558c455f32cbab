#![allow(dead_code)]

pub mod grammar_fixtures;

use std::path::{Path, PathBuf};

/// Write `contents` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
