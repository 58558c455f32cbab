//! Loader configuration.
//!
//! The only setting is whether parsers capture source locations. A process
//! decides this once at startup; readers receive the value at construction so
//! parser selection never consults global state mid-load.

use once_cell::sync::OnceCell;

/// Environment variable read by [`LoaderConfig::from_env`].
pub const CAPTURE_METADATA_ENV: &str = "GRAMMAR_CAPTURE_METADATA";

static GLOBAL: OnceCell<LoaderConfig> = OnceCell::new();

/// Settings shared by every grammar load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoaderConfig {
    /// Annotate dictionaries and arrays with their source location.
    pub capture_metadata: bool,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capture_metadata(mut self, capture: bool) -> Self {
        self.capture_metadata = capture;
        self
    }

    /// Build a config from [`CAPTURE_METADATA_ENV`].
    ///
    /// `1`, `true`, `yes` and `on` (any case) enable capture; anything else,
    /// including an unset variable, leaves it off.
    pub fn from_env() -> Self {
        let capture = std::env::var(CAPTURE_METADATA_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self::new().with_capture_metadata(capture)
    }

    /// The process-wide config.
    ///
    /// Initialised from the environment on first use unless [`init`](Self::init)
    /// ran earlier; read-only afterwards.
    pub fn global() -> &'static LoaderConfig {
        GLOBAL.get_or_init(|| {
            let config = Self::from_env();
            tracing::debug!("Grammar loader config: {:?}", config);
            config
        })
    }

    /// Install the process-wide config. Fails with the rejected value if
    /// the config has already been set or read.
    pub fn init(config: LoaderConfig) -> Result<(), LoaderConfig> {
        GLOBAL.set(config)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
