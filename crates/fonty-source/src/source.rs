//! Catalog sources

use std::io::Read;
use std::path::PathBuf;

use fonty_catalog::FontRecord;

use crate::document::parse_catalog;
use crate::{Result, SourceError};

/// Something that can supply a catalog listing
pub trait CatalogSource {
    /// Load and validate the listing
    fn load(&mut self) -> Result<Vec<FontRecord>>;
}

/// Listing snapshot stored in a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&mut self) -> Result<Vec<FontRecord>> {
        tracing::debug!("Loading catalog from {}", self.path.display());
        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        parse_catalog(&json)
    }
}

/// Listing read from any reader, e.g. stdin
#[derive(Debug)]
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Create a source; `name` identifies the reader in errors
    pub fn new(name: &str, reader: R) -> Self {
        Self {
            name: name.to_string(),
            reader,
        }
    }
}

impl<R: Read> CatalogSource for ReaderSource<R> {
    fn load(&mut self) -> Result<Vec<FontRecord>> {
        let mut json = String::new();
        self.reader
            .read_to_string(&mut json)
            .map_err(|source| SourceError::Io {
                path: self.name.clone(),
                source,
            })?;
        parse_catalog(&json)
    }
}
