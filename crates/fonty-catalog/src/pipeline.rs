//! Catalog adaptation pipeline

use crate::config::Configuration;
use crate::filters::{KHMER, remove_single_style_families, remove_unsupported_subset};
use crate::record::{AdaptedCatalog, FontRecord};
use crate::spread::spread_catalog;

/// Adapt a catalog according to `config`
///
/// Khmer families are removed first, then the catalog is either spread or
/// reduced to families with an upright variant. Without spreading,
/// `strip_italic` has no effect of its own: italic-only families are always
/// removed on that path.
pub fn adapt(list: &[FontRecord], config: &Configuration) -> AdaptedCatalog {
    let stripped;
    let list = if config.strip_khmer {
        stripped = remove_unsupported_subset(list, KHMER);
        stripped.as_slice()
    } else {
        list
    };

    if config.spread {
        AdaptedCatalog::Variants(spread_catalog(list, !config.strip_italic))
    } else {
        AdaptedCatalog::Families(remove_single_style_families(list))
    }
}

/// Adapts catalog listings as they arrive from a catalog source
///
/// Listings are passed through untouched while no option is enabled.
#[derive(Debug, Clone, Default)]
pub struct CatalogAdaptor {
    config: Configuration,
}

impl CatalogAdaptor {
    /// Create an adaptor with the given options
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Options in use
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Check if listings will be changed at all
    pub fn should_modify(&self) -> bool {
        self.config.is_active()
    }

    /// Adapt a listing
    pub fn handle(&self, list: Vec<FontRecord>) -> AdaptedCatalog {
        if !self.should_modify() {
            tracing::debug!("No adaptation configured, passing {} fonts through", list.len());
            return AdaptedCatalog::Families(list);
        }
        adapt(&list, &self.config)
    }
}
