//! Leveled diagnostics on stderr.
//!
//! The level comes from the number of `-v` flags, capped at debug. `RUST_LOG`,
//! when set, wins.

use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            _ => Self::Debug,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str().to_ascii_lowercase()))
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(verbosity.filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
