use std::fmt;
use std::time::Duration;

use super::display::format_duration;

/// Metadata for one media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    title: String,
    artist: String,
    file_type: String,
    duration_seconds: u32,
}

impl MediaRecord {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_seconds: u32,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            file_type: file_type.into(),
            duration_seconds,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// File type tag, e.g. `mp3` or `flac`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_seconds))
    }
}

impl fmt::Display for MediaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title,
            self.artist,
            format_duration(self.duration_seconds)
        )
    }
}
