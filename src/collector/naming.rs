use crate::config::NamingSettings;

/// The only container the tag writer handles. Matched case-insensitively.
pub const TRACK_EXTENSION: &str = "mp3";

const TRANSLITERATIONS: [(char, &str); 7] = [
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
];

/// Strip one trailing underscore so the prefix and the index are joined by
/// exactly one `_`.
pub fn normalize_prefix(prefix: &str) -> &str {
    prefix.strip_suffix('_').unwrap_or(prefix)
}

/// Replace German umlauts and `ß` with their ASCII spellings.
///
/// `replace_chars("Größe") == "Groesse"`
pub fn replace_chars(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Destination file name for the track at `index`.
pub fn track_file_name(prefix: &str, index: u32, settings: &NamingSettings) -> String {
    let mut name = format!(
        "{}_{:0width$}.{}",
        normalize_prefix(prefix),
        index,
        TRACK_EXTENSION,
        width = settings.index_width
    );

    if settings.replace_spaces {
        name = name.replace(' ', "_");
    }
    if settings.transliterate {
        name = replace_chars(&name);
    }
    name
}
