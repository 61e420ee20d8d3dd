use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::NamingSettings;

use super::model::SourceTrack;
use super::naming::TRACK_EXTENSION;

fn is_track_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(&format!(".{TRACK_EXTENSION}"))
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Find every track under `root`, ordered by path relative to `root`.
///
/// Anything under `exclude` (normally the destination directory) is ignored
/// so a destination nested in the source tree never feeds back into the run.
pub fn discover(root: &Path, exclude: Option<&Path>, settings: &NamingSettings) -> Vec<SourceTrack> {
    let mut tracks: Vec<SourceTrack> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker.into_iter().filter_entry(|e| {
        let hidden_ok = settings.include_hidden || e.depth() == 0 || !is_hidden(e.path());
        let excluded = e.depth() > 0 && exclude.is_some_and(|x| e.path() == x);
        hidden_ok && !excluded
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() && !path.is_file() {
            continue;
        }
        if !is_track_file(path) {
            debug!("Ignoring \"{}\"", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        tracks.push(SourceTrack {
            path: path.to_path_buf(),
            relative,
        });
    }

    // Per-directory sorting alone leaves the interleaving of files and
    // subdirectories up to the walker; the full relative path is the key.
    tracks.sort_by(|a, b| a.relative.cmp(&b.relative));
    tracks
}
