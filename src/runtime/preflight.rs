use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::logging::Verbosity;
use crate::tagger::AudiobookMetadata;

/// Everything a run needs, resolved and validated before any file I/O.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
    pub metadata: AudiobookMetadata,
    pub settings: Settings,
    pub verbosity: Verbosity,
}

impl RunConfig {
    pub fn from_args(args: Args, verbosity: Verbosity) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Settings::load_from(Some(path), true)?,
            None => Settings::load()?,
        };

        if let Some(policy) = args.clear_policy {
            settings.tagging.clear_policy = policy;
        }
        if let Some(style) = args.title_style {
            settings.tagging.title_style = style;
        }
        if args.no_id3v1 {
            settings.tagging.write_id3v1 = false;
        }
        settings.validate()?;

        check_input(&args.input)?;
        check_output(&args.output)?;

        if args.prefix.trim().is_empty() {
            return Err(Error::Configuration("prefix must not be empty".to_string()));
        }

        let cover = args
            .cover
            .unwrap_or_else(|| args.input.join(&settings.tagging.cover_file_name));

        let metadata = AudiobookMetadata {
            series: args.series,
            asin: args.asin,
            genre: args.genre,
            cover: Some(cover),
            ..AudiobookMetadata::new(args.author, args.album, args.year)
        };

        Ok(Self {
            input: args.input,
            output: args.output,
            prefix: args.prefix,
            metadata,
            settings,
            verbosity,
        })
    }
}

pub(super) fn check_input(input: &Path) -> Result<()> {
    if input.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingDirectory(input.to_path_buf()))
    }
}

/// The output may be missing, but then its parent has to exist.
pub(super) fn check_output(output: &Path) -> Result<()> {
    if output.exists() {
        if output.is_dir() {
            return Ok(());
        }
        return Err(Error::Configuration(format!(
            "output \"{}\" is not a directory",
            output.display()
        )));
    }

    match output.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Ok(()),
        Some(parent) => Err(Error::MissingDirectory(parent.to_path_buf())),
        None => Err(Error::MissingDirectory(output.to_path_buf())),
    }
}
