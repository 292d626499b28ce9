//! Track sequences: a playlist's ordered, duplicate-free list of records.
//!
//! Nodes live in an index arena and are linked in both directions, so a
//! removal never leaves a dangling link and navigation can step to either
//! neighbour from any node.

mod model;
mod nav;

pub use model::*;
pub use nav::Iter;

#[cfg(test)]
mod tests;
