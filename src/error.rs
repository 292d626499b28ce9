//! Error type shared by the catalog and its track sequences.
//!
//! Every failure is a precondition violation the caller can match on; none of
//! them leave a structure partially mutated.

/// Errors returned by catalog and sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("title already exists in playlist: {0}")]
    DuplicateTitle(String),

    #[error("playlist already exists: {0}")]
    DuplicateName(String),

    #[error("playlist is empty: {0}")]
    EmptySequence(String),

    #[error("the catalog is empty")]
    EmptyCatalog,

    #[error("title is not in the playlist: {0}")]
    TitleNotFound(String),

    #[error("playlist is not in the catalog: {0}")]
    NameNotFound(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
