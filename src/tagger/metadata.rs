use std::path::PathBuf;

pub const DEFAULT_GENRE: &str = "Audiobook";

/// Book-level metadata shared read-only by every track of a run.
///
/// `series` and `asin` are `None` when not supplied; their frames are then
/// absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudiobookMetadata {
    pub author: String,
    pub album: String,
    pub year: u32,
    pub series: Option<String>,
    /// Amazon / Audible Standard Identification Number, e.g. `B09X7FS3ZC`.
    pub asin: Option<String>,
    pub genre: String,
    pub cover: Option<PathBuf>,
}

impl AudiobookMetadata {
    pub fn new(author: impl Into<String>, album: impl Into<String>, year: u32) -> Self {
        Self {
            author: author.into(),
            album: album.into(),
            year,
            series: None,
            asin: None,
            genre: DEFAULT_GENRE.to_string(),
            cover: None,
        }
    }
}

/// `(current, total)` pair written to TRCK as `current/total`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrackPosition {
    pub index: u32,
    pub total: u32,
}

impl TrackPosition {
    pub fn new(index: u32, total: u32) -> Self {
        Self { index, total }
    }
}

impl std::fmt::Display for TrackPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}
