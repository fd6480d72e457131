//! Catalog spreading
//!
//! Turns each family into one entry per variant so a listing can show
//! every weight and style on its own row.

use crate::label::variant_label;
use crate::matching::resolve_default_variant;
use crate::record::{AdaptedFontRecord, FontRecord};
use crate::weight::is_italic;

/// Spread a catalog into one entry per variant
///
/// Italic variants are skipped unless `allow_italic` is set. Exactly the
/// entry for the family's default variant is flagged, so a family whose
/// default is italic has no flagged entry when italics are skipped.
pub fn spread_catalog(list: &[FontRecord], allow_italic: bool) -> Vec<AdaptedFontRecord> {
    let mut result = Vec::with_capacity(list.iter().map(|r| r.variants.len()).sum());

    for record in list {
        let default_variant = resolve_default_variant(record);
        tracing::debug!("Default variant of {}: {:?}", record.family, default_variant);

        for variant in &record.variants {
            if !allow_italic && is_italic(variant) {
                continue;
            }
            result.push(AdaptedFontRecord::from_variant(
                record,
                variant,
                variant_label(&record.family, variant),
                default_variant == Some(variant.as_str()),
            ));
        }
    }

    if !list.is_empty() {
        tracing::info!(
            "Bumped font list to {}, increase {:.2} times",
            result.len(),
            result.len() as f64 / list.len() as f64
        );
    }
    result
}
