//! Grammar file loading.
//!
//! Two readers share one shape: a path, a [`GrammarFormat`](crate::parser::GrammarFormat) resolved once at
//! construction, and a [`LoaderConfig`]. Each is consumed by its single load.
//!
//! | Reader                  | Read            | Errors                                  |
//! |-------------------------|-----------------|-----------------------------------------|
//! | [`SyncGrammarReader`]   | `std::fs`       | [`LoadError`]: path + reading/parsing   |
//! | [`AsyncGrammarReader`]  | `tokio::fs`     | [`SourceError`]: raw I/O or parse error |

#[cfg(feature = "async")]
mod async_reader;
mod error;
mod sync_reader;

#[cfg(feature = "async")]
pub use async_reader::AsyncGrammarReader;
pub use error::{LoadError, LoadPhase, SourceError};
pub use sync_reader::SyncGrammarReader;

use std::path::Path;

use crate::config::LoaderConfig;
use crate::value::RawGrammar;

/// Load a grammar on the calling thread using the process-wide config.
pub fn read_grammar_sync(path: impl AsRef<Path>) -> Result<RawGrammar, LoadError> {
    read_grammar_sync_with(path, LoaderConfig::global())
}

/// Load a grammar on the calling thread with an explicit config.
pub fn read_grammar_sync_with(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<RawGrammar, LoadError> {
    SyncGrammarReader::for_path(path.as_ref(), *config).load()
}

/// Load a grammar without blocking, using the process-wide config.
///
/// `callback` is invoked exactly once with the outcome.
#[cfg(feature = "async")]
pub async fn read_grammar<F>(path: impl AsRef<Path>, callback: F)
where
    F: FnOnce(Result<RawGrammar, SourceError>),
{
    read_grammar_with(path, LoaderConfig::global(), callback).await
}

/// Load a grammar without blocking with an explicit config.
#[cfg(feature = "async")]
pub async fn read_grammar_with<F>(path: impl AsRef<Path>, config: &LoaderConfig, callback: F)
where
    F: FnOnce(Result<RawGrammar, SourceError>),
{
    AsyncGrammarReader::for_path(path.as_ref(), *config)
        .load(callback)
        .await
}

#[cfg(test)]
mod tests;
