use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub copied: usize,
    pub tagged: usize,
    pub skipped: Vec<PathBuf>,
    pub cover_embedded: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Copied {} file(s), tagged {}, skipped {}",
            self.copied,
            self.tagged,
            self.skipped.len()
        )?;
        if self.cover_embedded {
            write!(f, ", cover embedded")?;
        }
        for path in &self.skipped {
            write!(f, "\n  skipped: {}", path.display())?;
        }
        Ok(())
    }
}
