use std::fmt;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::media::MediaRecord;
use crate::sequence::TrackSequence;

#[derive(Debug, Clone)]
struct PlaylistNode {
    playlist: TrackSequence,
    next: Option<usize>,
}

/// Ordered collection of playlists keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCatalog {
    nodes: Vec<Option<PlaylistNode>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl PlaylistCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `playlist` after the last one.
    ///
    /// Fails with `InvalidArgument` for an empty name and `DuplicateName` when
    /// the name is taken.
    pub fn add(&mut self, playlist: TrackSequence) -> Result<()> {
        if playlist.name().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "playlist has an empty name".to_string(),
            ));
        }

        // Full scan for the name, remembering the last node to link onto.
        let mut last = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let Some(node) = self.slot(idx) else { break };
            if node.playlist.name() == playlist.name() {
                return Err(CatalogError::DuplicateName(playlist.name().to_string()));
            }
            last = Some(idx);
            cursor = node.next;
        }

        debug!(playlist = playlist.name(), tracks = playlist.len(), "adding playlist");

        let idx = self.alloc(PlaylistNode {
            playlist,
            next: None,
        });
        match last.and_then(|l| self.slot_mut(l)) {
            Some(node) => node.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.len += 1;
        Ok(())
    }

    /// Unlink the playlist called `name` and hand it back with its tracks.
    pub fn remove(&mut self, name: &str) -> Result<TrackSequence> {
        if self.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let Some(node) = self.slot(idx) else { break };
            if node.playlist.name() == name {
                break;
            }
            prev = Some(idx);
            cursor = node.next;
        }

        let not_found = || CatalogError::NameNotFound(name.to_string());
        let idx = cursor.ok_or_else(not_found)?;
        let node = self.release(idx).ok_or_else(not_found)?;
        match prev.and_then(|p| self.slot_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }

        self.len -= 1;
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }

        debug!(playlist = name, remaining = self.len, "removed playlist");
        Ok(node.playlist)
    }

    /// Look up a playlist by name.
    pub fn get(&self, name: &str) -> Result<&TrackSequence> {
        self.position(name)
            .and_then(|idx| self.slot(idx))
            .map(|node| &node.playlist)
            .ok_or_else(|| CatalogError::NameNotFound(name.to_string()))
    }

    /// Look up a playlist by name for in-place edits.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut TrackSequence> {
        self.position(name)
            .and_then(|idx| self.slot_mut(idx))
            .map(|node| &mut node.playlist)
            .ok_or_else(|| CatalogError::NameNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append `record` to the playlist called `playlist`.
    pub fn add_track(&mut self, playlist: &str, record: MediaRecord) -> Result<()> {
        self.get_mut(playlist)?.append(record)
    }

    /// Remove the track titled `title` from the playlist called `playlist`.
    pub fn remove_track(&mut self, playlist: &str, title: &str) -> Result<MediaRecord> {
        self.get_mut(playlist)?.remove(title)
    }

    /// Iterate playlists in catalog order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            catalog: self,
            cursor: self.head,
        }
    }

    /// Playlist names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(TrackSequence::name).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.slot(idx)?;
            if node.playlist.name() == name {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }

    fn slot(&self, idx: usize) -> Option<&PlaylistNode> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, idx: usize) -> Option<&mut PlaylistNode> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: PlaylistNode) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<PlaylistNode> {
        let node = self.nodes.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }
}

impl fmt::Display for PlaylistCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist Manager: ")?;
        for playlist in self.iter() {
            write!(f, "{playlist}")?;
        }
        Ok(())
    }
}

/// Forward iterator over a catalog's playlists.
pub struct Iter<'a> {
    catalog: &'a PlaylistCatalog,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TrackSequence;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.catalog.slot(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.playlist)
    }
}

impl<'a> IntoIterator for &'a PlaylistCatalog {
    type Item = &'a TrackSequence;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
