use super::clear::clear_tags;
use super::cover::CoverArt;
use super::*;
use crate::config::{ClearPolicy, TaggingSettings, TitleStyle};
use crate::test_support::{fake_jpeg, write_mp3};
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::mpeg::MpegFile;
use lofty::picture::{MimeType, PictureType};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag, TagType};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn read_tag(path: &Path, tag_type: TagType) -> Option<Tag> {
    let tagged = Probe::open(path).unwrap().read().unwrap();
    tagged.tag(tag_type).cloned()
}

fn user_text(path: &Path, description: &str) -> Option<String> {
    let mut file = fs::File::open(path).unwrap();
    let mpeg = MpegFile::read_from(&mut file, ParseOptions::new()).unwrap();
    mpeg.id3v2()
        .and_then(|t| t.get_user_text(description))
        .map(str::to_string)
}

fn book() -> AudiobookMetadata {
    AudiobookMetadata {
        series: Some("Kluftinger".into()),
        asin: Some("B09X7FS3ZC".into()),
        ..AudiobookMetadata::new("Volker Klüpfel", "Affenhitze", 2020)
    }
}

fn track(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    write_mp3(&path);
    path
}

#[test]
fn writes_every_field_into_an_untagged_file() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    let meta = book();
    let settings = TaggingSettings::default();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    let outcome = writer.write_tags(&path, TrackPosition::new(1, 3)).unwrap();
    assert_eq!(outcome, TagOutcome::Tagged);

    let tag = read_tag(&path, TagType::Id3v2).expect("id3v2 tag");
    assert_eq!(tag.artist().as_deref(), Some("Volker Klüpfel"));
    assert_eq!(tag.title().as_deref(), Some("Test_001"));
    assert_eq!(tag.album().as_deref(), Some("Affenhitze"));
    assert_eq!(tag.genre().as_deref(), Some("Audiobook"));
    assert_eq!(tag.track(), Some(1));
    assert_eq!(tag.track_total(), Some(3));
    assert!(
        tag.get_string(ItemKey::RecordingDate)
            .is_some_and(|d| d.starts_with("2020"))
    );

    assert_eq!(user_text(&path, "SERIES").as_deref(), Some("Kluftinger"));
    assert_eq!(user_text(&path, "ASIN").as_deref(), Some("B09X7FS3ZC"));
}

#[test]
fn writes_a_field_limited_id3v1_block() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_002.mp3");
    let meta = book();
    let settings = TaggingSettings::default();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    writer.write_tags(&path, TrackPosition::new(2, 3)).unwrap();

    let v1 = read_tag(&path, TagType::Id3v1).expect("id3v1 tag");
    assert_eq!(v1.title().as_deref(), Some("Test_002"));
    assert_eq!(v1.album().as_deref(), Some("Affenhitze"));
    assert_eq!(v1.track(), Some(2));
}

#[test]
fn id3v1_can_be_disabled() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    let meta = book();
    let settings = TaggingSettings {
        write_id3v1: false,
        ..TaggingSettings::default()
    };

    TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&path, TrackPosition::new(1, 1))
        .unwrap();

    assert!(read_tag(&path, TagType::Id3v1).is_none());
    assert!(read_tag(&path, TagType::Id3v2).is_some());
}

#[test]
fn absent_series_and_asin_leave_no_frames() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    let meta = AudiobookMetadata::new("A", "B", 2020);
    let settings = TaggingSettings::default();

    TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&path, TrackPosition::new(1, 1))
        .unwrap();

    assert_eq!(user_text(&path, "SERIES"), None);
    assert_eq!(user_text(&path, "ASIN"), None);
    let tag = read_tag(&path, TagType::Id3v2).unwrap();
    assert_eq!(tag.artist().as_deref(), Some("A"));
}

#[test]
fn stale_fields_from_a_previous_tag_do_not_survive() {
    for policy in [ClearPolicy::InPlace, ClearPolicy::SeparatePass] {
        let dir = tempdir().unwrap();
        let path = track(dir.path(), "Test_001.mp3");

        let mut old = Tag::new(TagType::Id3v2);
        old.set_artist("Old Artist".into());
        old.set_comment("left over".into());
        old.insert_text(ItemKey::Composer, "Old Composer".into());
        old.save_to_path(&path, WriteOptions::default()).unwrap();

        let meta = AudiobookMetadata::new("A", "B", 2020);
        let settings = TaggingSettings {
            clear_policy: policy,
            ..TaggingSettings::default()
        };
        TagWriter::new(&meta, &settings)
            .unwrap()
            .write_tags(&path, TrackPosition::new(1, 1))
            .unwrap();

        let tag = read_tag(&path, TagType::Id3v2).unwrap();
        assert_eq!(tag.artist().as_deref(), Some("A"), "{policy:?}");
        assert_eq!(tag.comment(), None, "{policy:?}");
        assert_eq!(tag.get_string(ItemKey::Composer), None, "{policy:?}");
    }
}

#[test]
fn writing_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_003.mp3");
    let cover = dir.path().join("cover.jpg");
    fs::write(&cover, fake_jpeg()).unwrap();

    let meta = AudiobookMetadata {
        cover: Some(cover),
        ..book()
    };
    let settings = TaggingSettings::default();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    writer.write_tags(&path, TrackPosition::new(3, 3)).unwrap();
    let first = read_tag(&path, TagType::Id3v2).unwrap();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    writer.write_tags(&path, TrackPosition::new(3, 3)).unwrap();
    let second = read_tag(&path, TagType::Id3v2).unwrap();

    assert_eq!(first.artist(), second.artist());
    assert_eq!(first.title(), second.title());
    assert_eq!(second.track(), Some(3));
    assert_eq!(second.track_total(), Some(3));
    assert_eq!(second.pictures().len(), 1);
    assert_eq!(first.item_count(), second.item_count());
    assert_eq!(user_text(&path, "SERIES").as_deref(), Some("Kluftinger"));
}

#[test]
fn cover_is_embedded_as_jpeg_front_cover_and_copied_once() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let cover = src.path().join("cover.jpg");
    let jpeg = fake_jpeg();
    fs::write(&cover, &jpeg).unwrap();

    let meta = AudiobookMetadata {
        cover: Some(cover),
        ..book()
    };
    let settings = TaggingSettings::default();
    let paths: Vec<PathBuf> = (1..=3)
        .map(|i| track(out.path(), &format!("Test_{i:03}.mp3")))
        .collect();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    assert!(writer.has_cover());
    for (i, p) in paths.iter().enumerate() {
        writer
            .write_tags(p, TrackPosition::new(i as u32 + 1, 3))
            .unwrap();
    }

    for p in &paths {
        let tag = read_tag(p, TagType::Id3v2).unwrap();
        let pics = tag.pictures();
        assert_eq!(pics.len(), 1);
        assert_eq!(pics[0].pic_type(), PictureType::CoverFront);
        assert_eq!(pics[0].mime_type(), Some(&MimeType::Jpeg));
        assert_eq!(pics[0].data(), jpeg.as_slice());
    }
    assert_eq!(fs::read(out.path().join("cover.jpg")).unwrap(), jpeg);
}

#[test]
fn missing_cover_only_skips_cover_work() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    let meta = AudiobookMetadata {
        cover: Some(dir.path().join("nope.jpg")),
        ..book()
    };
    let settings = TaggingSettings::default();

    let mut writer = TagWriter::new(&meta, &settings).unwrap();
    assert!(!writer.has_cover());
    assert_eq!(
        writer.write_tags(&path, TrackPosition::new(1, 1)).unwrap(),
        TagOutcome::Tagged
    );

    let tag = read_tag(&path, TagType::Id3v2).unwrap();
    assert!(tag.pictures().is_empty());
    assert_eq!(tag.album().as_deref(), Some("Affenhitze"));
    assert!(!dir.path().join("nope.jpg").exists());
}

#[test]
fn cover_copy_onto_itself_is_a_no_op() {
    let dir = tempdir().unwrap();
    let cover_path = dir.path().join("cover.jpg");
    fs::write(&cover_path, fake_jpeg()).unwrap();

    let cover = CoverArt::load(Some(&cover_path)).unwrap().unwrap();
    let target = cover.copy_into(dir.path()).unwrap();
    assert_eq!(target, cover_path);
    assert_eq!(fs::read(&cover_path).unwrap(), fake_jpeg());
}

#[test]
fn corrupt_file_is_skipped_in_place_but_fatal_with_separate_pass() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Test_002.mp3");
    fs::write(&path, b"this is plain text, not audio").unwrap();
    let meta = book();

    let in_place = TaggingSettings::default();
    let outcome = TagWriter::new(&meta, &in_place)
        .unwrap()
        .write_tags(&path, TrackPosition::new(2, 3))
        .unwrap();
    assert!(matches!(outcome, TagOutcome::Skipped { .. }));
    assert_eq!(fs::read(&path).unwrap(), b"this is plain text, not audio");

    let separate = TaggingSettings {
        clear_policy: ClearPolicy::SeparatePass,
        ..TaggingSettings::default()
    };
    let err = TagWriter::new(&meta, &separate)
        .unwrap()
        .write_tags(&path, TrackPosition::new(2, 3));
    assert!(err.is_err());
}

#[test]
fn non_audio_content_of_any_size_is_skipped() {
    let dir = tempdir().unwrap();
    let meta = book();
    let settings = TaggingSettings::default();
    let mut writer = TagWriter::new(&meta, &settings).unwrap();

    let text: Vec<u8> = b"chapter list, not audio\n".iter().copied().cycle().take(4096).collect();
    let samples: [(&str, Vec<u8>); 4] = [
        ("short.mp3", b"not audio, only a few bytes".to_vec()),
        ("empty.mp3", Vec::new()),
        ("text.mp3", text),
        ("zeros.mp3", vec![0u8; 4096]),
    ];

    for (name, bytes) in samples {
        let path = dir.path().join(name);
        fs::write(&path, &bytes).unwrap();
        let outcome = writer.write_tags(&path, TrackPosition::new(1, 1)).unwrap();
        assert!(matches!(outcome, TagOutcome::Skipped { .. }), "{name}");
        assert_eq!(fs::read(&path).unwrap(), bytes, "{name}");
    }
}

#[test]
fn missing_file_is_an_io_error_not_a_skip() {
    let dir = tempdir().unwrap();
    let meta = book();
    let settings = TaggingSettings::default();

    let err = TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&dir.path().join("gone.mp3"), TrackPosition::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, crate::error::Error::Io { .. }));
    assert!(!err.is_skippable());
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_an_io_error_not_a_skip() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&path).is_ok() {
        // Running with CAP_DAC_OVERRIDE (root); permissions are not enforced.
        return;
    }

    let meta = book();
    let settings = TaggingSettings::default();
    let err = TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&path, TrackPosition::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, crate::error::Error::Io { .. }));

    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
}

#[test]
fn album_track_title_style_pads_index() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_007.mp3");
    let meta = AudiobookMetadata::new("A", "Affenhitze", 2020);
    let settings = TaggingSettings {
        title_style: TitleStyle::AlbumTrack,
        ..TaggingSettings::default()
    };

    TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&path, TrackPosition::new(7, 12))
        .unwrap();

    let tag = read_tag(&path, TagType::Id3v2).unwrap();
    assert_eq!(tag.title().as_deref(), Some("Affenhitze - 007"));
}

#[test]
fn clear_tags_removes_every_block() {
    let dir = tempdir().unwrap();
    let path = track(dir.path(), "Test_001.mp3");
    let meta = book();
    let settings = TaggingSettings::default();
    TagWriter::new(&meta, &settings)
        .unwrap()
        .write_tags(&path, TrackPosition::new(1, 1))
        .unwrap();

    clear_tags(&path).unwrap();

    assert!(read_tag(&path, TagType::Id3v2).is_none());
    assert!(read_tag(&path, TagType::Id3v1).is_none());
}

#[test]
fn track_position_formats_as_slash_pair() {
    assert_eq!(TrackPosition::new(4, 12).to_string(), "4/12");
    assert_eq!(AudiobookMetadata::new("a", "b", 1999).genre, DEFAULT_GENRE);
}
