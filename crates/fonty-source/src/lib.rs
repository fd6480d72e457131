//! Fonty Source
//!
//! The catalog side of Fonty: listing documents, record validation, sort
//! options, listing request URLs and the [`CatalogSource`] seam. Fetching
//! the listing over the network is left to the caller.

mod document;
mod sort;
mod source;

pub use document::{WebfontList, parse_catalog, validate_record};
pub use sort::{SortOrder, WEBFONTS_ENDPOINT, catalog_url};
pub use source::{CatalogSource, FileSource, ReaderSource};

/// Catalog source error
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a font listing: expected an array of records or an object with items")]
    UnexpectedDocument,

    #[error("Invalid font record {family:?}: {reason}")]
    InvalidRecord { family: String, reason: &'static str },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
