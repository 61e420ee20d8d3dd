//! Tag Writer: replaces the ID3 tags of every renamed track with the book
//! level metadata and the track's position in the run.
//!
//! Per file: probe/clear -> set fields -> embed cover (optional) -> save.
//! Two containers are saved, ID3v2.4 for current players and ID3v1.1 for
//! old ones.

mod build;
mod clear;
mod cover;
mod metadata;
mod writer;

pub use metadata::*;
pub use writer::{TagOutcome, TagWriter};

#[cfg(test)]
mod tests;
