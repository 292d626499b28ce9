use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::{debug, info, warn};

use crate::catalog::PlaylistCatalog;
use crate::config::LibrarySettings;
use crate::error::CatalogError;
use crate::media::MediaRecord;
use crate::sequence::TrackSequence;

use super::scan::{is_hidden, scan, scan_to_depth};

/// Build a catalog from the library rooted at `root`.
///
/// Loose files in `root` form the `root_playlist` playlist, which comes first;
/// every other playlist is a subdirectory, in name order. Empty playlists are
/// left out. Blank-named directories, and records or playlists whose key is
/// taken or unusable, are skipped with a warning.
pub fn import(root: &Path, settings: &LibrarySettings) -> anyhow::Result<PlaylistCatalog> {
    if !root.is_dir() {
        bail!("library root {} is not a directory", root.display());
    }

    let mut catalog = PlaylistCatalog::new();

    // Loose files sit at depth 1; a zero depth cap leaves them out too.
    let root_depth = settings.max_depth.map_or(1, |d| d.min(1));
    let loose = scan_to_depth(root, settings, Some(root_depth));
    add_playlist(&mut catalog, &settings.root_playlist, loose)?;

    for dir in playlist_dirs(root, settings)? {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let records = scan(&dir, settings);
        add_playlist(&mut catalog, &name, records)?;
    }

    info!(
        root = %root.display(),
        playlists = catalog.len(),
        "imported library"
    );
    Ok(catalog)
}

/// Immediate subdirectories of `root`, sorted by path.
fn playlist_dirs(root: &Path, settings: &LibrarySettings) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read library root {}", root.display()))?;

    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        let is_link = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
        if is_link && !settings.follow_links {
            continue;
        }
        if !path.is_dir() || (!settings.include_hidden && is_hidden(&path)) {
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

fn add_playlist(
    catalog: &mut PlaylistCatalog,
    name: &str,
    records: Vec<MediaRecord>,
) -> anyhow::Result<()> {
    if records.is_empty() {
        debug!(playlist = name, "no audio files, skipping playlist");
        return Ok(());
    }
    if name.trim().is_empty() {
        warn!(playlist = name, "blank directory name, skipping playlist");
        return Ok(());
    }

    let mut playlist = TrackSequence::new(name);
    for record in records {
        match playlist.append(record) {
            Ok(()) => {}
            Err(CatalogError::DuplicateTitle(title)) => {
                warn!(playlist = name, %title, "duplicate title, skipping track");
            }
            Err(CatalogError::InvalidArgument(reason)) => {
                warn!(playlist = name, %reason, "unusable track, skipping");
            }
            Err(e) => return Err(e).with_context(|| format!("failed to build playlist {name}")),
        }
    }

    match catalog.add(playlist) {
        Ok(()) => Ok(()),
        Err(CatalogError::DuplicateName(taken)) => {
            warn!(playlist = %taken, "playlist name already taken, skipping directory");
            Ok(())
        }
        Err(CatalogError::InvalidArgument(reason)) => {
            warn!(playlist = name, %reason, "unusable playlist, skipping directory");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("failed to add playlist {name}")),
    }
}
