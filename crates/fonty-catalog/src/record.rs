//! Font catalog records
//!
//! Shapes of the records served by the web font directory and of the
//! single-variant entries produced when a catalog is spread.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::weight::is_italic;

/// A font family as listed by the directory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRecord {
    /// Family name
    pub family: String,
    /// Descriptive category (serif, sans-serif, display, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Writing systems covered by the family
    #[serde(default)]
    pub subsets: Vec<String>,
    /// Variant codes in directory order
    #[serde(default)]
    pub variants: Vec<String>,
    /// Variant code to resource locator
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, String>,
    /// Directory resource kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Any other field the directory serves, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FontRecord {
    /// Create a record with the given family and variants
    pub fn new(family: &str, variants: &[&str]) -> Self {
        Self {
            family: family.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Set the category
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the supported subsets
    pub fn subsets(mut self, subsets: &[&str]) -> Self {
        self.subsets = subsets.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add a resource locator for a variant
    pub fn file(mut self, variant: &str, locator: &str) -> Self {
        self.files.insert(variant.to_string(), locator.to_string());
        self
    }

    /// Check if the family covers a subset
    pub fn supports_subset(&self, subset: &str) -> bool {
        self.subsets.iter().any(|s| s == subset)
    }

    /// Check if the family has at least one upright variant
    pub fn has_upright_variant(&self) -> bool {
        self.variants.iter().any(|v| !is_italic(v))
    }
}

/// A single variant of a family, produced by spreading a catalog
///
/// Carries every field of the source record except the resource locators
/// and the directory kind. Source fields named like the entry's own fields
/// are replaced by them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedFontRecord {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub subsets: Vec<String>,
    /// All variants of the source family
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
    /// Family name with the human readable variant name, if known
    pub label: String,
    /// The variant this entry stands for
    pub variant: String,
    /// Whether this is the default variant of its family
    pub is_default: bool,
}

impl AdaptedFontRecord {
    /// Keys serialized from the entry's own fields
    const OWN_KEYS: [&'static str; 3] = ["label", "variant", "isDefault"];

    /// Build the entry for one variant of `record`
    pub fn from_variant(record: &FontRecord, variant: &str, label: String, is_default: bool) -> Self {
        let mut extra = record.extra.clone();
        for key in Self::OWN_KEYS {
            extra.remove(key);
        }

        Self {
            family: record.family.clone(),
            category: record.category.clone(),
            subsets: record.subsets.clone(),
            variants: record.variants.clone(),
            version: record.version.clone(),
            last_modified: record.last_modified.clone(),
            extra,
            label,
            variant: variant.to_string(),
            is_default,
        }
    }
}

/// Result of adapting a catalog
///
/// Both shapes serialize as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdaptedCatalog {
    /// One entry per family (catalog not spread)
    Families(Vec<FontRecord>),
    /// One entry per variant (catalog spread)
    Variants(Vec<AdaptedFontRecord>),
}

impl AdaptedCatalog {
    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            AdaptedCatalog::Families(list) => list.len(),
            AdaptedCatalog::Variants(list) => list.len(),
        }
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Family names in entry order (repeated per variant when spread)
    pub fn families(&self) -> Vec<&str> {
        match self {
            AdaptedCatalog::Families(list) => list.iter().map(|r| r.family.as_str()).collect(),
            AdaptedCatalog::Variants(list) => list.iter().map(|r| r.family.as_str()).collect(),
        }
    }

    /// Per-family records, if the catalog was not spread
    pub fn as_families(&self) -> Option<&[FontRecord]> {
        match self {
            AdaptedCatalog::Families(list) => Some(list),
            AdaptedCatalog::Variants(_) => None,
        }
    }

    /// Per-variant records, if the catalog was spread
    pub fn as_variants(&self) -> Option<&[AdaptedFontRecord]> {
        match self {
            AdaptedCatalog::Families(_) => None,
            AdaptedCatalog::Variants(list) => Some(list),
        }
    }
}
