//! Error taxonomy for a pipeline run.
//!
//! Only [`Error::UnsupportedFile`] is recoverable: the tag writer logs it and
//! moves on to the next track. Everything else ends the run with exit code 1.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required argument is missing or malformed, or settings failed validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A directory the run depends on does not exist.
    #[error("directory \"{}\" not found", .0.display())]
    MissingDirectory(PathBuf),

    /// The file could not be parsed as an MPEG audio container.
    #[error("file type unknown: \"{}\" ({reason})", path.display())]
    UnsupportedFile { path: PathBuf, reason: String },

    /// Copy, read or write failure on a concrete path.
    #[error("I/O error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tag save failure reported by lofty.
    #[error("failed to write tags to \"{}\": {source}", path.display())]
    Tag {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    /// Settings file or environment could not be deserialized.
    #[error("failed to load settings: {0}")]
    Settings(#[from] ::config::ConfigError),
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn tag(path: impl AsRef<Path>, source: lofty::error::LoftyError) -> Self {
        Self::Tag {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the batch may continue past this error.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::UnsupportedFile { .. })
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}
