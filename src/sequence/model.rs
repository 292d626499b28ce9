use std::fmt;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::media::MediaRecord;

#[derive(Debug, Clone)]
pub(super) struct TrackNode {
    pub(super) record: MediaRecord,
    pub(super) prev: Option<usize>,
    pub(super) next: Option<usize>,
}

/// A named, doubly linked sequence of media records.
///
/// Titles are unique within a sequence (exact, case-sensitive match).
#[derive(Debug, Clone)]
pub struct TrackSequence {
    name: String,
    pub(super) nodes: Vec<Option<TrackNode>>,
    free: Vec<usize>,
    pub(super) head: Option<usize>,
    pub(super) tail: Option<usize>,
    len: usize,
}

impl TrackSequence {
    /// Create an empty sequence called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `record` at the tail.
    ///
    /// Fails with `InvalidArgument` for an empty title and `DuplicateTitle`
    /// when a record with the same title is already present. Nothing is
    /// linked until both checks pass.
    pub fn append(&mut self, record: MediaRecord) -> Result<()> {
        if record.title().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "media record has an empty title".to_string(),
            ));
        }
        if self.position(record.title()).is_some() {
            return Err(CatalogError::DuplicateTitle(record.title().to_string()));
        }

        debug!(playlist = %self.name, title = record.title(), "appending track");

        let old_tail = self.tail;
        let idx = self.alloc(TrackNode {
            record,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|t| self.slot_mut(t)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Unlink the record titled `title` and hand it back.
    pub fn remove(&mut self, title: &str) -> Result<MediaRecord> {
        if self.is_empty() {
            return Err(self.empty_error());
        }
        let node = self
            .position(title)
            .and_then(|idx| self.release(idx))
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))?;

        match node.prev {
            Some(p) => {
                if let Some(prev) = self.slot_mut(p) {
                    prev.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        // No successor means the tail itself was removed.
        match node.next {
            Some(n) => {
                if let Some(next) = self.slot_mut(n) {
                    next.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.len -= 1;
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }

        debug!(playlist = %self.name, title, remaining = self.len, "removed track");
        Ok(node.record)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Look up a record by title.
    pub fn get(&self, title: &str) -> Option<&MediaRecord> {
        self.position(title).and_then(|idx| self.record(idx))
    }

    /// First record in the sequence.
    pub fn head(&self) -> Option<&MediaRecord> {
        self.head.and_then(|idx| self.record(idx))
    }

    /// Last record in the sequence.
    pub fn tail(&self) -> Option<&MediaRecord> {
        self.tail.and_then(|idx| self.record(idx))
    }

    pub(super) fn empty_error(&self) -> CatalogError {
        CatalogError::EmptySequence(self.name.clone())
    }

    /// Arena index of the node holding `title`, scanning from the head.
    pub(super) fn position(&self, title: &str) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.slot(idx)?;
            if node.record.title() == title {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }

    pub(super) fn slot(&self, idx: usize) -> Option<&TrackNode> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    pub(super) fn record(&self, idx: usize) -> Option<&MediaRecord> {
        self.slot(idx).map(|node| &node.record)
    }

    fn slot_mut(&mut self, idx: usize) -> Option<&mut TrackNode> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: TrackNode) -> usize {
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

    fn release(&mut self, idx: usize) -> Option<TrackNode> {
        let node = self.nodes.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }
}

impl PartialEq for TrackSequence {
    /// Two sequences are equal when they share a name and hold equal records
    /// in the same order, regardless of arena layout.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for TrackSequence {}

impl fmt::Display for TrackSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist: {}", self.name)?;
        for (i, record) in self.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, record.title())?;
        }
        Ok(())
    }
}
