//! Wraparound navigation and ordered iteration over a `TrackSequence`.

use std::iter::FusedIterator;

use crate::error::{CatalogError, Result};
use crate::media::MediaRecord;

use super::model::TrackSequence;

impl TrackSequence {
    /// Return the record after `current`.
    ///
    /// `None` means "start of the sequence" and yields the head. The tail
    /// wraps around to the head.
    pub fn next_after(&self, current: Option<&str>) -> Result<&MediaRecord> {
        if self.is_empty() {
            return Err(self.empty_error());
        }
        let Some(title) = current else {
            return self.head().ok_or_else(|| self.empty_error());
        };

        self.position(title)
            .and_then(|idx| self.slot(idx))
            .and_then(|node| node.next.or(self.head))
            .and_then(|idx| self.record(idx))
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))
    }

    /// Return the record before `current`.
    ///
    /// `None` yields the tail. The head wraps around to the tail.
    pub fn previous_before(&self, current: Option<&str>) -> Result<&MediaRecord> {
        if self.is_empty() {
            return Err(self.empty_error());
        }
        let Some(title) = current else {
            return self.tail().ok_or_else(|| self.empty_error());
        };

        self.position(title)
            .and_then(|idx| self.slot(idx))
            .and_then(|node| node.prev.or(self.tail))
            .and_then(|idx| self.record(idx))
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))
    }

    /// Iterate records head to tail. Reversing walks the backward links.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            seq: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

/// Borrowing iterator over a sequence's records.
pub struct Iter<'a> {
    seq: &'a TrackSequence,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MediaRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.slot(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.slot(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.record)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TrackSequence {
    type Item = &'a MediaRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
