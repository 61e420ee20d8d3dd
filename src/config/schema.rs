use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiobook-generator/config.toml`
/// or `~/.config/audiobook-generator/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `AUDIOBOOK_GENERATOR__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub naming: NamingSettings,
    pub tagging: TaggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Minimum number of digits in the numeric suffix.
    pub index_width: usize,
    /// Transliterate umlauts and `ß` in generated file names.
    pub transliterate: bool,
    /// Replace spaces with underscores in generated file names.
    pub replace_spaces: bool,
    /// Whether to follow symlinks while walking the source tree.
    pub follow_links: bool,
    /// Whether to collect hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            index_width: 3,
            transliterate: true,
            replace_spaces: true,
            follow_links: false,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaggingSettings {
    /// How stale tag data is removed before new fields are written.
    pub clear_policy: ClearPolicy,
    /// How the title frame is derived for each track.
    pub title_style: TitleStyle,
    /// Also write an ID3v1.1 block for older players.
    pub write_id3v1: bool,
    /// Cover file looked up in the input directory when `--cover` is not given.
    pub cover_file_name: String,
    /// Copy the cover image next to the tagged files.
    pub copy_cover: bool,
}

impl Default for TaggingSettings {
    fn default() -> Self {
        Self {
            clear_policy: ClearPolicy::InPlace,
            title_style: TitleStyle::FileStem,
            write_id3v1: true,
            cover_file_name: "cover.jpg".to_string(),
            copy_cover: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ClearPolicy {
    /// Probe the file, skip it when unreadable, then replace every tag block.
    #[serde(alias = "in_place", alias = "inplace", alias = "a")]
    InPlace,
    /// Strip tags in a separate load/save cycle first; unreadable files abort the run.
    #[serde(alias = "separate_pass", alias = "separate", alias = "b")]
    SeparatePass,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TitleStyle {
    /// Destination file name without extension, e.g. `Kluftinger_012`.
    #[serde(alias = "file_stem", alias = "filename")]
    FileStem,
    /// Album name and zero padded track index, e.g. `Affenhitze - 012`.
    #[serde(alias = "album_track")]
    AlbumTrack,
}
