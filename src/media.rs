//! Media records: the immutable per-file metadata stored in playlists.
//!
//! A `MediaRecord` is identified by its title inside a single playlist and
//! renders as `"title - artist (m:ss)"`.

mod display;
mod model;

pub use display::format_duration;
pub use model::*;
