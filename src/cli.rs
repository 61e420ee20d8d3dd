//! Command line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ClearPolicy, TitleStyle};
use crate::tagger::DEFAULT_GENRE;

#[derive(Debug, Parser)]
#[command(name = "audiobook-generator", version)]
#[command(about = "Order audiobook and add ID3 tags.", long_about = None)]
pub struct Args {
    /// Verbose mode: -v for info, -vv (or more) for debug output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to audiobook source
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to audiobook destination
    #[arg(short, long)]
    pub output: PathBuf,

    /// Filename prefix. (e.g. Kluftinger_12_Affenhitze)
    #[arg(short, long)]
    pub prefix: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Album name
    #[arg(long)]
    pub album: String,

    /// Publishing year
    #[arg(short, long)]
    pub year: u32,

    /// Series name
    #[arg(long)]
    pub series: Option<String>,

    /// Amazon / Audible Standard Identification Number (e.g. B09X7FS3ZC)
    #[arg(long)]
    pub asin: Option<String>,

    /// Genre
    #[arg(long, default_value = DEFAULT_GENRE)]
    pub genre: String,

    /// Path to audiobook cover (image/jpeg). Default: <input>/cover.jpg
    #[arg(long)]
    pub cover: Option<PathBuf>,

    /// Settings file; must exist when given
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How existing tags are removed before writing
    #[arg(long, value_enum)]
    pub clear_policy: Option<ClearPolicy>,

    /// How the title frame is derived
    #[arg(long, value_enum)]
    pub title_style: Option<TitleStyle>,

    /// Only write the ID3v2.4 tag
    #[arg(long)]
    pub no_id3v1: bool,
}
