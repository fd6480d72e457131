//! Catalog filters
//!
//! Both filters drop whole families and leave the kept records untouched.

use crate::record::FontRecord;

/// Subset code of the Khmer script
pub const KHMER: &str = "khmer";

/// Keep only the families that do not cover `subset`
///
/// A family covering `subset` is dropped even if it also covers others,
/// which is unusual enough to be logged as a warning.
pub fn remove_unsupported_subset(list: &[FontRecord], subset: &str) -> Vec<FontRecord> {
    let result: Vec<FontRecord> = list
        .iter()
        .filter(|record| {
            if !record.supports_subset(subset) {
                return true;
            }
            if record.subsets.len() > 1 {
                tracing::warn!(
                    "Font record includes more than {}: {} ({})",
                    subset,
                    record.family,
                    record.subsets.join(", ")
                );
            }
            false
        })
        .cloned()
        .collect();

    tracing::info!("Removed {} fonts as {}", list.len() - result.len(), subset);
    result
}

/// Keep only the families with at least one upright variant
///
/// Italic variants of kept families stay in place.
pub fn remove_single_style_families(list: &[FontRecord]) -> Vec<FontRecord> {
    list.iter()
        .filter(|record| record.has_upright_variant())
        .cloned()
        .collect()
}
