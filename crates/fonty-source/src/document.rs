//! Directory listing documents
//!
//! Accepts the listing response (`{"kind": ..., "items": [...]}`) as served
//! by the directory, or a bare array of records.

use fonty_catalog::FontRecord;
use serde::Deserialize;
use serde_json::Value;

use crate::{Result, SourceError};

/// Listing response of the directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebfontList {
    #[serde(default)]
    pub kind: Option<String>,
    pub items: Vec<FontRecord>,
}

/// Parse a listing document into validated records
pub fn parse_catalog(json: &str) -> Result<Vec<FontRecord>> {
    let value: Value = serde_json::from_str(json)?;

    let records: Vec<FontRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else if value.get("items").is_some() {
        let listing: WebfontList = serde_json::from_value(value)?;
        listing.items
    } else {
        return Err(SourceError::UnexpectedDocument);
    };

    for record in &records {
        validate_record(record)?;
    }

    tracing::debug!("Parsed {} font records", records.len());
    Ok(records)
}

/// Check that a record can go through adaptation
///
/// Every record needs a family name and at least one variant.
pub fn validate_record(record: &FontRecord) -> Result<()> {
    if record.family.trim().is_empty() {
        return Err(SourceError::InvalidRecord {
            family: record.family.clone(),
            reason: "empty family name",
        });
    }
    if record.variants.is_empty() {
        return Err(SourceError::InvalidRecord {
            family: record.family.clone(),
            reason: "no variants",
        });
    }
    Ok(())
}
