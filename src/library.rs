//! Library importer: turns a music directory into a playlist catalog.
//!
//! Each immediate subdirectory of the library root becomes one playlist,
//! audio files sitting directly in the root go to a configurable catch-all
//! playlist. Files are only read, never written.

mod import;
mod scan;

pub use import::import;
pub use scan::scan;
