use tracing::{debug, info};

use crate::collector::{TRACK_EXTENSION, collect_and_rename};
use crate::error::Result;
use crate::tagger::{TagOutcome, TagWriter, TrackPosition};

use super::preflight::RunConfig;
use super::summary::RunSummary;

/// Copy and rename every track, then tag the copies in index order.
pub fn execute(cfg: &RunConfig) -> Result<RunSummary> {
    debug!("Run configuration ({:?}): {cfg:?}", cfg.verbosity);

    info!("Get all \"*.{TRACK_EXTENSION}\" files in subfolders");
    let tracks = collect_and_rename(&cfg.input, &cfg.output, &cfg.prefix, &cfg.settings.naming)?;

    let mut summary = RunSummary {
        copied: tracks.len(),
        ..RunSummary::default()
    };
    if tracks.is_empty() {
        return Ok(summary);
    }

    info!("Set ID3 tags to destination files");
    let total = tracks.len() as u32;
    let mut writer = TagWriter::new(&cfg.metadata, &cfg.settings.tagging)?;

    for track in &tracks {
        debug!(
            "Track {} of {} copied from \"{}\"",
            track.index,
            total,
            track.source.display()
        );
        match writer.write_tags(&track.path, TrackPosition::new(track.index, total))? {
            TagOutcome::Tagged => summary.tagged += 1,
            TagOutcome::Skipped { reason } => {
                debug!("Skipped \"{}\": {reason}", track.path.display());
                summary.skipped.push(track.path.clone());
            }
        }
    }

    summary.cover_embedded = writer.has_cover() && summary.tagged > 0;
    Ok(summary)
}
