//! Collector/Renamer: discovers the audio tracks of a source tree and copies
//! them into a flat destination directory under sequential names.
//!
//! The returned [`RenamedTrack`] list is the authoritative ordering for the
//! rest of the pipeline. Index `n` always lands in `{prefix}_{n:03}.mp3`.

mod copy;
mod model;
mod naming;
mod scan;

pub use copy::collect_and_rename;
pub use naming::TRACK_EXTENSION;
pub use model::*;
