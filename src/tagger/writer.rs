use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lofty::config::WriteOptions;
use lofty::prelude::*;
use tracing::{error, info};

use crate::config::{ClearPolicy, TaggingSettings, TitleStyle};
use crate::error::{Error, Result};

use super::build::{id3v1_tag, id3v2_tag};
use super::clear::{clear_tags, probe, strip};
use super::cover::CoverArt;
use super::metadata::{AudiobookMetadata, TrackPosition};

/// Result of tagging one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    Tagged,
    Skipped { reason: String },
}

/// Writes the same book metadata into many files.
///
/// The cover is read once at construction and copied once per destination
/// directory.
pub struct TagWriter<'a> {
    metadata: &'a AudiobookMetadata,
    settings: &'a TaggingSettings,
    cover: Option<CoverArt>,
    cover_copied_to: HashSet<PathBuf>,
}

impl<'a> TagWriter<'a> {
    pub fn new(metadata: &'a AudiobookMetadata, settings: &'a TaggingSettings) -> Result<Self> {
        let cover = CoverArt::load(metadata.cover.as_deref())?;
        Ok(Self {
            metadata,
            settings,
            cover,
            cover_copied_to: HashSet::new(),
        })
    }

    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    fn title_for(&self, path: &Path, pos: TrackPosition) -> String {
        match self.settings.title_style {
            TitleStyle::FileStem => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            TitleStyle::AlbumTrack => {
                let width = pos.total.to_string().len().max(3);
                format!("{} - {:0width$}", self.metadata.album, pos.index)
            }
        }
    }

    /// Replace all tags of `path` and record `pos` as its track number.
    ///
    /// Under [`ClearPolicy::InPlace`] a file that does not parse as MPEG audio
    /// is logged and reported as [`TagOutcome::Skipped`].
    pub fn write_tags(&mut self, path: &Path, pos: TrackPosition) -> Result<TagOutcome> {
        info!("");
        info!("Processing file: \"{}\"", path.display());

        match self.settings.clear_policy {
            ClearPolicy::InPlace => {
                let existing = match probe(path) {
                    Ok(existing) => existing,
                    Err(e) if e.is_skippable() => {
                        error!("{e}");
                        return Ok(TagOutcome::Skipped {
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => return Err(e),
                };
                if !existing.has_id3() {
                    info!("No ID3 tag found");
                    info!("Create ID3 frame");
                }
                info!("Cleanup current ID3 tags");
                strip(path, &existing)?;
            }
            ClearPolicy::SeparatePass => clear_tags(path)?,
        }

        let meta = self.metadata;
        let title = self.title_for(path, pos);

        info!("Set ID3 tags");
        info!("Set {:<9} to \"{}\"", "artist", meta.author);
        info!("Set {:<9} to \"{}\"", "title", title);
        info!("Set {:<9} to \"{}\"", "album", meta.album);
        info!("Set {:<9} to \"{}\"", "year", meta.year);
        info!("Set {:<9} to \"{}\"", "series", meta.series.as_deref().unwrap_or(""));
        info!("Set {:<9} to \"{}\"", "asin", meta.asin.as_deref().unwrap_or(""));
        info!("Set {:<9} to \"{}\"", "genre", meta.genre);
        info!("Set {:<9} to \"{}\"", "track_num", pos);
        if let Some(cover) = &self.cover {
            info!("Set {:<9} to \"{}\"", "images", cover.path.display());
        }

        id3v2_tag(meta, &title, pos, self.cover.as_ref())
            .save_to_path(path, WriteOptions::default())
            .map_err(|e| Error::tag(path, e))?;

        if self.settings.write_id3v1 {
            id3v1_tag(meta, &title, pos)
                .save_to_path(path, WriteOptions::default())
                .map_err(|e| Error::tag(path, e))?;
        }

        if self.settings.copy_cover {
            self.copy_cover_next_to(path)?;
        }

        Ok(TagOutcome::Tagged)
    }

    fn copy_cover_next_to(&mut self, path: &Path) -> Result<()> {
        let Some(cover) = &self.cover else {
            return Ok(());
        };
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if self.cover_copied_to.contains(&dir) {
            return Ok(());
        }
        cover.copy_into(&dir)?;
        self.cover_copied_to.insert(dir);
        Ok(())
    }
}
