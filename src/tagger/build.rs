use lofty::id3::v2::Id3v2Tag;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag, TagType};

use super::cover::CoverArt;
use super::metadata::{AudiobookMetadata, TrackPosition};

const SERIES_DESCRIPTION: &str = "SERIES";
const ASIN_DESCRIPTION: &str = "ASIN";

/// ID3v1 stores the track number in a single byte.
const ID3V1_MAX_TRACK: u32 = 255;

/// Fields shared by both containers.
fn base_tag(tag_type: TagType, meta: &AudiobookMetadata, title: &str) -> Tag {
    let mut tag = Tag::new(tag_type);
    tag.set_artist(meta.author.clone());
    tag.set_title(title.to_string());
    tag.set_album(meta.album.clone());
    tag.set_genre(meta.genre.clone());
    tag.insert_text(ItemKey::RecordingDate, meta.year.to_string());
    tag
}

/// Extended container: everything, including TXXX frames and the cover.
pub(super) fn id3v2_tag(
    meta: &AudiobookMetadata,
    title: &str,
    pos: TrackPosition,
    cover: Option<&CoverArt>,
) -> Id3v2Tag {
    let mut tag = base_tag(TagType::Id3v2, meta, title);
    tag.insert_text(ItemKey::OriginalReleaseDate, meta.year.to_string());
    tag.set_track(pos.index);
    tag.set_track_total(pos.total);

    if let Some(cover) = cover {
        tag.push_picture(cover.picture());
    }

    let mut id3v2 = Id3v2Tag::from(tag);
    if let Some(series) = meta.series.as_deref().filter(|s| !s.is_empty()) {
        id3v2.insert_user_text(SERIES_DESCRIPTION.to_string(), series.to_string());
    }
    if let Some(asin) = meta.asin.as_deref().filter(|s| !s.is_empty()) {
        id3v2.insert_user_text(ASIN_DESCRIPTION.to_string(), asin.to_string());
    }
    id3v2
}

/// Field-limited container: title, artist, album, year, track and genre.
pub(super) fn id3v1_tag(meta: &AudiobookMetadata, title: &str, pos: TrackPosition) -> Tag {
    let mut tag = base_tag(TagType::Id3v1, meta, title);
    tag.insert_text(ItemKey::Year, meta.year.to_string());
    if pos.index <= ID3V1_MAX_TRACK {
        tag.set_track(pos.index);
    }
    tag
}
