use std::path::PathBuf;
use std::time::Instant;

use super::SourceError;
use crate::config::LoaderConfig;
use crate::parser::GrammarFormat;
use crate::value::RawGrammar;

/// Non-blocking, single-use grammar reader.
///
/// The file read suspends on `tokio::fs`; parsing then runs to completion on
/// the current task. Errors are passed through as-is: unlike
/// [`SyncGrammarReader`](super::SyncGrammarReader), no path or phase context
/// is added, since existing callers match on the raw error.
#[derive(Debug, Clone)]
pub struct AsyncGrammarReader {
    path: PathBuf,
    format: GrammarFormat,
    config: LoaderConfig,
}

impl AsyncGrammarReader {
    pub fn new(path: impl Into<PathBuf>, format: GrammarFormat, config: LoaderConfig) -> Self {
        Self {
            path: path.into(),
            format,
            config,
        }
    }

    /// Reader whose format is selected from the path.
    pub fn for_path(path: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        let path = path.into();
        let format = GrammarFormat::from_path(&path);
        Self::new(path, format, config)
    }

    pub fn format(&self) -> GrammarFormat {
        self.format
    }

    /// Read and parse the file, handing the outcome to `callback`.
    ///
    /// `callback` runs exactly once, after the read has resolved, with either
    /// the grammar or the error. Dropping the future before it completes
    /// abandons the load and the callback never runs.
    pub async fn load<F>(self, callback: F)
    where
        F: FnOnce(Result<RawGrammar, SourceError>),
    {
        callback(self.load_result().await);
    }

    /// Read and parse the file, returning the outcome directly.
    pub async fn load_result(self) -> Result<RawGrammar, SourceError> {
        let started = Instant::now();
        tracing::debug!(
            "Loading grammar {} as {} (capture_metadata={}, async)",
            self.path.display(),
            self.format,
            self.config.capture_metadata
        );

        let bytes = tokio::fs::read(&self.path).await.inspect_err(|e| {
            tracing::warn!("Grammar read failed for {}: {}", self.path.display(), e);
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let root = self
            .format
            .parse(&text, &self.path, self.config.capture_metadata)
            .inspect_err(|e| {
                tracing::warn!("Grammar parse failed for {}: {}", self.path.display(), e);
            })?;

        tracing::debug!(
            "Loaded grammar {} in {:?}",
            self.path.display(),
            started.elapsed()
        );
        Ok(RawGrammar::new(root, self.path, self.format))
    }

    /// Start the load as a Tokio task and return immediately.
    ///
    /// The callback runs on the runtime once the task completes, never before
    /// this method returns.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn spawn<F>(self, callback: F) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(Result<RawGrammar, SourceError>) + Send + 'static,
    {
        tokio::spawn(self.load(callback))
    }
}
