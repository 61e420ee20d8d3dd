use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::NamingSettings;
use crate::error::{Error, Result};

use super::model::RenamedTrack;
use super::naming::track_file_name;
use super::scan::discover;

/// Copy every track under `source` into `dest` as `{prefix}_{index}.{ext}`.
///
/// `dest` is created when missing (the root only, not its parents). Source
/// files are never modified. The first failed copy aborts the run; files
/// copied before it are left in place.
pub fn collect_and_rename(
    source: &Path,
    dest: &Path,
    prefix: &str,
    settings: &NamingSettings,
) -> Result<Vec<RenamedTrack>> {
    if !dest.exists() {
        fs::create_dir(dest).map_err(|e| Error::io(dest, e))?;
    }

    info!("Source path: \"{}\"", source.display());
    info!("Destination path: \"{}\"", dest.display());

    let exclude = dest.canonicalize().ok();
    let root = source.canonicalize().map_err(|e| Error::io(source, e))?;
    let found = discover(&root, exclude.as_deref(), settings);

    let mut renamed = Vec::with_capacity(found.len());
    for (i, track) in found.into_iter().enumerate() {
        let index = u32::try_from(i + 1).map_err(|_| {
            Error::Configuration(format!("too many tracks under \"{}\"", source.display()))
        })?;
        let name = track_file_name(prefix, index, settings);
        let target = dest.join(&name);

        info!("Rename \"{}\" to \"{}\"", track.file_name(), name);
        fs::copy(&track.path, &target).map_err(|e| Error::io(&track.path, e))?;

        renamed.push(RenamedTrack {
            source: track.path,
            path: target,
            index,
        });
    }

    Ok(renamed)
}
