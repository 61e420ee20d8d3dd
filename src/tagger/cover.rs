use std::fs;
use std::path::{Path, PathBuf};

use lofty::picture::{MimeType, Picture, PictureType};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Cover image bytes, read once per run.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

impl CoverArt {
    /// Read the cover at `path`. A configured but missing file only warns.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>> {
        let Some(path) = path else { return Ok(None) };

        if !path.is_file() {
            warn!(
                "Cover image \"{}\" not found, skipping cover art",
                path.display()
            );
            return Ok(None);
        }

        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        Ok(Some(Self {
            path: path.to_path_buf(),
            data,
        }))
    }

    /// Front cover picture. The MIME type is always `image/jpeg`.
    pub fn picture(&self) -> Picture {
        Picture::unchecked(self.data.clone())
            .pic_type(PictureType::CoverFront)
            .mime_type(MimeType::Jpeg)
            .build()
    }

    /// Copy the cover file into `dir`, keeping its file name.
    pub fn copy_into(&self, dir: &Path) -> Result<PathBuf> {
        let name = self
            .path
            .file_name()
            .ok_or_else(|| Error::Configuration(format!("invalid cover path \"{}\"", self.path.display())))?;
        let target = dir.join(name);

        if same_file(&self.path, &target) {
            return Ok(target);
        }

        info!("Copy cover image to \"{}\"", dir.display());
        fs::copy(&self.path, &target).map_err(|e| Error::io(&target, e))?;
        Ok(target)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
