#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{JSON_GRAMMAR, PLIST_GRAMMAR, write_fixture};
use crate::config::LoaderConfig;
use crate::loader::{
    AsyncGrammarReader, SourceError, SyncGrammarReader, read_grammar_sync_with, read_grammar_with,
};
use crate::parser::{GrammarFormat, ParseError};
use crate::value::RawGrammar;
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Run a callback-style load and collect every invocation.
async fn collect(reader: AsyncGrammarReader) -> Vec<Result<RawGrammar, SourceError>> {
    let calls = RefCell::new(Vec::new());
    reader.load(|result| calls.borrow_mut().push(result)).await;
    calls.into_inner()
}

#[tokio::test]
async fn test_callback_invoked_once_with_grammar() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "demo.json", JSON_GRAMMAR);

    let mut calls = collect(AsyncGrammarReader::for_path(&path, LoaderConfig::default())).await;
    assert_eq!(calls.len(), 1);

    let grammar = calls.pop().unwrap().unwrap();
    let blocking = read_grammar_sync_with(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(grammar, blocking);
}

#[tokio::test]
async fn test_matches_blocking_load_for_both_formats() {
    let dir = TempDir::new().unwrap();
    for (name, contents) in [("demo.json", JSON_GRAMMAR), ("demo.tmLanguage", PLIST_GRAMMAR)] {
        let path = write_fixture(dir.path(), name, contents);
        for config in [LoaderConfig::default(), LoaderConfig::default().with_capture_metadata(true)] {
            let non_blocking = AsyncGrammarReader::for_path(&path, config)
                .load_result()
                .await
                .unwrap();
            let blocking = SyncGrammarReader::for_path(&path, config).load().unwrap();
            assert_eq!(non_blocking, blocking, "{name} capture={}", config.capture_metadata);
        }
    }
}

#[tokio::test]
async fn test_missing_file_passes_raw_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let mut calls = collect(AsyncGrammarReader::for_path(&path, LoaderConfig::default())).await;
    assert_eq!(calls.len(), 1);

    let err = calls.pop().unwrap().unwrap_err();
    let io = err.as_io().expect("io error");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    // No path/phase wrapping on the non-blocking path
    assert_eq!(err.to_string(), io.to_string());
    assert!(!err.to_string().contains("Error reading"));
}

#[tokio::test]
async fn test_parse_failure_passes_raw_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "broken.json", "[1, 2");

    let mut calls = collect(AsyncGrammarReader::for_path(&path, LoaderConfig::default())).await;
    assert_eq!(calls.len(), 1);

    let err = calls.pop().unwrap().unwrap_err();
    let parse = err.as_parse().expect("parse error");
    assert!(parse.is_malformed());
    assert_eq!(err.to_string(), parse.to_string());
    assert!(!err.to_string().contains("Error parsing"));
    assert!(!err.to_string().contains(&path.display().to_string()));
}

#[tokio::test]
async fn test_unsupported_plist_value() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "demo.plist", "<plist><array><uid>1</uid></array></plist>");

    let result = AsyncGrammarReader::new(&path, GrammarFormat::Plist, LoaderConfig::default())
        .load_result()
        .await;
    assert!(matches!(
        result,
        Err(SourceError::Parse(ParseError::UnsupportedValueType { .. }))
    ));
}

#[tokio::test]
async fn test_read_grammar_with_free_function() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "demo.tmLanguage", PLIST_GRAMMAR);

    let mut scope = None;
    let mut invocations = 0;
    read_grammar_with(&path, &LoaderConfig::default(), |result| {
        invocations += 1;
        scope = result.unwrap().scope_name().map(str::to_string);
    })
    .await;

    assert_eq!(invocations, 1);
    assert_eq!(scope.as_deref(), Some("source.demo"));
}

#[tokio::test]
async fn test_spawn_returns_before_callback_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "demo.json", JSON_GRAMMAR);

    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let handle = AsyncGrammarReader::for_path(&path, LoaderConfig::default()).spawn(move |result| {
        sink.lock().unwrap().push(result.is_ok());
    });

    // Single-threaded runtime: the task cannot have run yet
    assert!(calls.lock().unwrap().is_empty());

    handle.await.unwrap();
    assert_eq!(*calls.lock().unwrap(), vec![true]);
}
