//! Fonty Catalog - Font Catalog Adaptation
//!
//! Adapts a web font directory listing before it is shown:
//! - Subset filtering (families covering Khmer)
//! - Italic-only family removal
//! - Spreading families into one entry per variant
//! - Default variant resolution by closest weight
//!
//! Every operation is a pure function of its inputs.
//!
//! # Example
//! ```rust
//! use fonty_catalog::{adapt, Configuration, FontRecord};
//!
//! let catalog = vec![FontRecord::new("Roboto", &["regular", "italic", "700"])];
//! let adapted = adapt(&catalog, &Configuration::new().spread(true));
//! assert_eq!(adapted.len(), 3);
//! ```

pub mod weight;
pub mod matching;
pub mod label;
pub mod filters;
pub mod spread;
mod record;
mod config;
mod pipeline;

pub use record::{FontRecord, AdaptedFontRecord, AdaptedCatalog};
pub use config::Configuration;
pub use pipeline::{adapt, CatalogAdaptor};
pub use weight::{FontWeight, regular_weight, italic_weight, is_italic};
pub use matching::{WeightQuery, find_closest, resolve_default_variant};
pub use label::{label_suffix, variant_label};
pub use filters::{remove_unsupported_subset, remove_single_style_families, KHMER};
pub use spread::spread_catalog;

/// Catalog adaptation error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
