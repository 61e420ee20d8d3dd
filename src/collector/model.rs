use std::path::PathBuf;

/// An audio file found under the source root. Only ever read and copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTrack {
    pub path: PathBuf,
    /// Path relative to the source root; the sort key for index assignment.
    pub relative: PathBuf,
}

impl SourceTrack {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A copy of a [`SourceTrack`] in the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedTrack {
    pub source: PathBuf,
    pub path: PathBuf,
    /// 1-based, dense position within the run.
    pub index: u32,
}
