//! Fixtures shared by unit tests.

use std::fs;
use std::path::Path;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no CRC, no padding.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const FRAME_LEN: usize = 144 * 128_000 / 44_100;

/// A short, silent, tag-less MP3 stream.
pub fn mpeg_stream(frames: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&FRAME_HEADER);
        out.extend_from_slice(&frame);
    }
    out
}

pub fn write_mp3(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, mpeg_stream(40)).unwrap();
}

/// Bytes that start like a JPEG; the tag writer never decodes them.
pub fn fake_jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    data.extend((0..200u16).map(|i| (i % 251) as u8));
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}
