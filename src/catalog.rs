//! The playlist catalog: a singly linked, duplicate-free list of named
//! track sequences.
//!
//! Callers go through the catalog for everything; track-level edits are
//! forwarded to the sequence found by name.

mod model;

pub use model::*;
