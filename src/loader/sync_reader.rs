use std::path::PathBuf;
use std::time::Instant;

use super::LoadError;
use crate::config::LoaderConfig;
use crate::parser::GrammarFormat;
use crate::value::RawGrammar;

/// Blocking, single-use grammar reader.
///
/// Bound to one path and one format at construction; [`load`](Self::load)
/// consumes the reader.
#[derive(Debug, Clone)]
pub struct SyncGrammarReader {
    path: PathBuf,
    format: GrammarFormat,
    config: LoaderConfig,
}

impl SyncGrammarReader {
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

    /// Read and parse the file on the calling thread.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Read`] if the file cannot be read
    /// - [`LoadError::Parse`] if its contents are not a valid document of
    ///   the selected format
    pub fn load(self) -> Result<RawGrammar, LoadError> {
        let started = Instant::now();
        tracing::debug!(
            "Loading grammar {} as {} (capture_metadata={})",
            self.path.display(),
            self.format,
            self.config.capture_metadata
        );

        let result = self.read_and_parse();
        match &result {
            Ok(_) => tracing::debug!(
                "Loaded grammar {} in {:?}",
                self.path.display(),
                started.elapsed()
            ),
            Err(e) => tracing::warn!("Grammar load failed while {:?}: {}", e.phase(), e),
        }
        result
    }

    fn read_and_parse(&self) -> Result<RawGrammar, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let root = self
            .format
            .parse(&text, &self.path, self.config.capture_metadata)
            .map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(RawGrammar::new(root, self.path.clone(), self.format))
    }
}
