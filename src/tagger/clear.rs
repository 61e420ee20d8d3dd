use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lofty::file::{FileType, TaggedFileExt};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::TagType;
use tracing::info;

use crate::error::{Error, Result};

/// Tag blocks found on a file that parsed as MPEG audio.
#[derive(Debug, Clone, Default)]
pub(super) struct ExistingTags {
    pub types: Vec<TagType>,
}

impl ExistingTags {
    pub fn has_id3(&self) -> bool {
        self.types
            .iter()
            .any(|t| matches!(t, TagType::Id3v2 | TagType::Id3v1))
    }
}

/// Parse `path` and list its tag blocks.
///
/// Failing to open the file is an I/O error and stays fatal. Once it is open,
/// anything that does not parse as MPEG audio with at least one frame comes
/// back as [`Error::UnsupportedFile`], whatever lofty reports on the way.
pub(super) fn probe(path: &Path) -> Result<ExistingTags> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let unsupported = |reason: String| Error::UnsupportedFile {
        path: path.to_path_buf(),
        reason,
    };

    let tagged = Probe::with_file_type(BufReader::new(file), FileType::Mpeg)
        .read()
        .map_err(|e| unsupported(e.to_string()))?;

    if tagged.properties().duration().is_zero() {
        return Err(unsupported("no audio frames".to_string()));
    }

    Ok(ExistingTags {
        types: tagged.tags().iter().map(|t| t.tag_type()).collect(),
    })
}

/// Remove every listed tag block from the file.
pub(super) fn strip(path: &Path, existing: &ExistingTags) -> Result<()> {
    for tag_type in &existing.types {
        tag_type
            .remove_from_path(path)
            .map_err(|e| Error::tag(path, e))?;
    }
    Ok(())
}

/// Standalone clear pass: load the file, drop every tag block, save.
///
/// Unlike the in-place policy there is no skip path around this; the caller
/// propagates any failure, including [`Error::UnsupportedFile`].
pub fn clear_tags(path: &Path) -> Result<()> {
    let existing = probe(path)?;
    info!("Cleanup current ID3 tags");
    strip(path, &existing)
}
