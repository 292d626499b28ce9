use std::ffi::OsStr;
use std::path::Path;

use lofty::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::media::MediaRecord;

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Lowercased extension of `path` when it is one of `exts`.
fn audio_extension(path: &Path, exts: &[String]) -> Option<String> {
    let ext = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
    exts.contains(&ext).then_some(ext)
}

pub(super) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Scan `dir` recursively for audio files and build a record for each.
///
/// Records come back sorted case-insensitively by their rendering.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<MediaRecord> {
    scan_to_depth(dir, settings, settings.max_depth)
}

pub(super) fn scan_to_depth(
    dir: &Path,
    settings: &LibrarySettings,
    max_depth: Option<usize>,
) -> Vec<MediaRecord> {
    let exts = normalized_extensions(settings);
    let mut records: Vec<MediaRecord> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if let Some(d) = max_depth {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file_type) = audio_extension(path, &exts) {
            records.push(read_record(path, file_type, settings));
        }
    }

    records.sort_by_cached_key(|r| r.to_string().to_lowercase());
    records
}

fn read_record(path: &Path, file_type: String, settings: &LibrarySettings) -> MediaRecord {
    let mut title = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist: Option<String> = None;
    let mut duration_seconds = 0u32;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let secs = tagged.properties().duration().as_secs();
            duration_seconds = u32::try_from(secs).unwrap_or(u32::MAX);

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title() {
                    let v = v.trim();
                    if !v.is_empty() {
                        title = v.to_string();
                    }
                }
                if let Some(v) = tag.artist() {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = Some(v.to_string());
                    }
                }
            }
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable tags, using file name");
        }
    }

    MediaRecord::new(
        title,
        artist.unwrap_or_else(|| settings.unknown_artist.clone()),
        duration_seconds,
        file_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn audio_extension_matches_configured_extensions_case_insensitive() {
        let exts = normalized_extensions(&LibrarySettings::default());
        assert_eq!(
            audio_extension(Path::new("/tmp/a.mp3"), &exts).as_deref(),
            Some("mp3")
        );
        assert_eq!(
            audio_extension(Path::new("/tmp/a.MP3"), &exts).as_deref(),
            Some("mp3")
        );
        assert!(audio_extension(Path::new("/tmp/a.flac"), &exts).is_some());
        assert!(audio_extension(Path::new("/tmp/a.wav"), &exts).is_some());
        assert!(audio_extension(Path::new("/tmp/a.ogg"), &exts).is_some());
        assert!(audio_extension(Path::new("/tmp/a.txt"), &exts).is_none());
        assert!(audio_extension(Path::new("/tmp/a"), &exts).is_none());
    }

    #[test]
    fn normalized_extensions_strip_dots_and_blanks() {
        let settings = LibrarySettings {
            extensions: vec![".MP3".into(), "  ".into(), " flac ".into()],
            ..LibrarySettings::default()
        };
        assert_eq!(normalized_extensions(&settings), vec!["mp3", "flac"]);
    }

    #[test]
    fn scan_falls_back_to_stem_and_unknown_artist() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let records = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "A");
        assert_eq!(records[0].file_type(), "ogg");
        assert_eq!(records[0].artist(), "Unknown Artist");
        assert_eq!(records[0].duration_seconds(), 0);
        assert_eq!(records[1].title(), "b");
        assert_eq!(records[1].file_type(), "mp3");
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let records = scan(dir.path(), &settings);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), "visible");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let titles: Vec<String> = scan(dir.path(), &settings)
            .iter()
            .map(|r| r.title().to_string())
            .collect();
        assert!(titles.contains(&"root".to_string()));
        assert!(titles.contains(&"one".to_string()));
        assert!(!titles.contains(&"two".to_string()));
    }
}
