//! mixtape: an in-memory playlist catalog.
//!
//! A [`PlaylistCatalog`] holds named [`TrackSequence`]s, each an ordered list
//! of [`MediaRecord`]s with unique titles and wraparound navigation. The
//! [`library`] module builds a catalog from a music directory.

pub mod catalog;
pub mod config;
pub mod error;
pub mod library;
pub mod media;
pub mod sequence;

pub use catalog::PlaylistCatalog;
pub use error::{CatalogError, Result};
pub use media::MediaRecord;
pub use sequence::TrackSequence;
