//! Comprehensive tests for fonty-catalog
//!
//! Tests default variant resolution, filtering and spreading over
//! directory-shaped catalogs.

use fonty_catalog::*;

fn record(family: &str, variants: &[&str], subsets: &[&str]) -> FontRecord {
    FontRecord::new(family, variants)
        .category("sans-serif")
        .subsets(subsets)
}

fn sample_catalog() -> Vec<FontRecord> {
    vec![
        record("Roboto", &["100", "300", "regular", "italic", "500", "700", "700italic", "900"], &["latin", "cyrillic"]),
        record("Battambang", &["regular", "700"], &["khmer"]),
        record("Hanuman", &["regular", "700"], &["khmer", "latin"]),
        record("Molle", &["italic"], &["latin"]),
        record("Lobster", &["regular"], &["latin", "vietnamese"]),
        record("Slanted", &["300italic", "500italic"], &["latin"]),
        record("Oddity", &["oblique", "wide"], &["latin"]),
    ]
}

// ============================================================================
// DEFAULT VARIANT TESTS
// ============================================================================

#[test]
fn test_default_is_member_of_variants() {
    for record in sample_catalog() {
        let default = resolve_default_variant(&record).unwrap();
        assert!(record.variants.iter().any(|v| v == default), "{}", record.family);
    }
}

#[test]
fn test_default_prefers_regular_over_bold() {
    let record = record("Lato", &["regular", "italic", "700", "700italic"], &["latin"]);
    assert_eq!(resolve_default_variant(&record), Some("regular"));
}

#[test]
fn test_default_italic_only_family() {
    let record = record("Slanted", &["300italic", "500italic"], &["latin"]);
    assert_eq!(resolve_default_variant(&record), Some("500italic"));
}

#[test]
fn test_default_tie_goes_to_later_variant() {
    let record = record("Tied", &["300italic", "598italic"], &["latin"]);
    assert_eq!(resolve_default_variant(&record), Some("598italic"));
}

#[test]
fn test_default_prefers_upright_over_closer_italic() {
    let record = record("Heavy", &["italic", "900"], &["latin"]);
    assert_eq!(resolve_default_variant(&record), Some("900"));
}

#[test]
fn test_default_unscored_family() {
    let record = record("Oddity", &["oblique", "wide"], &["latin"]);
    assert_eq!(resolve_default_variant(&record), Some("oblique"));
}

// ============================================================================
// FILTER TESTS
// ============================================================================

#[test]
fn test_khmer_stripping_exact() {
    let catalog = sample_catalog();
    let result = remove_unsupported_subset(&catalog, KHMER);

    for record in &catalog {
        let kept = result.iter().any(|r| r.family == record.family);
        assert_eq!(kept, !record.supports_subset(KHMER), "{}", record.family);
    }
}

#[test]
fn test_single_style_removal() {
    let result = remove_single_style_families(&sample_catalog());
    let families: Vec<_> = result.iter().map(|r| r.family.as_str()).collect();

    assert!(!families.contains(&"Molle"));
    assert!(!families.contains(&"Slanted"));
    assert!(families.contains(&"Roboto"));
    assert!(families.contains(&"Oddity"));
}

// ============================================================================
// SPREAD TESTS
// ============================================================================

#[test]
fn test_spread_regular_italic_without_italics() {
    let catalog = vec![record("Lato", &["regular", "italic"], &["latin"])];
    let result = spread_catalog(&catalog, false);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].variant, "regular");
    assert!(result[0].is_default);
    assert_eq!(result[0].label, "Lato Regular");
}

#[test]
fn test_spread_fan_out() {
    let catalog = sample_catalog();
    let all: usize = catalog.iter().map(|r| r.variants.len()).sum();
    let upright: usize = catalog
        .iter()
        .map(|r| r.variants.iter().filter(|v| !is_italic(v)).count())
        .sum();

    assert_eq!(spread_catalog(&catalog, true).len(), all);
    assert_eq!(spread_catalog(&catalog, false).len(), upright);
}

#[test]
fn test_spread_one_default_per_family() {
    let catalog = sample_catalog();
    let result = spread_catalog(&catalog, true);

    for record in &catalog {
        let defaults = result
            .iter()
            .filter(|r| r.family == record.family && r.is_default)
            .count();
        assert_eq!(defaults, 1, "{}", record.family);
    }
}

#[test]
fn test_spread_keeps_source_fields() {
    let catalog = vec![record("Roboto", &["regular", "700"], &["latin"]).file("700", "roboto-700.ttf")];
    let result = spread_catalog(&catalog, true);

    for entry in &result {
        assert_eq!(entry.category.as_deref(), Some("sans-serif"));
        assert_eq!(entry.subsets, vec!["latin"]);
        assert_eq!(entry.variants, vec!["regular", "700"]);
    }
    assert_eq!(result[1].label, "Roboto Bold");
}

// ============================================================================
// PIPELINE TESTS
// ============================================================================

#[test]
fn test_adapt_non_spread_idempotent() {
    let config = Configuration::new().strip_khmer(true);
    let once = adapt(&sample_catalog(), &config);
    let twice = adapt(once.as_families().unwrap(), &config);

    assert_eq!(once, twice);
}

#[test]
fn test_adapt_does_not_mutate_input() {
    let catalog = sample_catalog();
    let _ = adapt(&catalog, &Configuration::new().strip_khmer(true).spread(true));
    assert_eq!(catalog, sample_catalog());
}

#[test]
fn test_adapt_full_config() {
    let config = Configuration::new().strip_khmer(true).strip_italic(true).spread(true);
    let result = adapt(&sample_catalog(), &config);
    let variants = result.as_variants().unwrap();

    assert!(variants.iter().all(|r| !is_italic(&r.variant)));
    assert!(variants.iter().all(|r| r.family != "Battambang" && r.family != "Hanuman"));
    // Roboto 6 upright, Lobster 1, Oddity 2
    assert_eq!(variants.len(), 9);
}

#[test]
fn test_adapt_serializes_as_array() {
    let result = adapt(&sample_catalog(), &Configuration::new().spread(true));
    let json = serde_json::to_value(&result).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), result.len());
    assert!(entries[0].get("isDefault").is_some());
}

#[test]
fn test_spread_overrides_stale_entry_keys() {
    let json = r#"[{"family": "Lato", "variants": ["regular", "700"], "label": "Old", "isDefault": true}]"#;
    let catalog: Vec<FontRecord> = serde_json::from_str(json).unwrap();
    let result = adapt(&catalog, &Configuration::new().spread(true));

    let text = serde_json::to_string(&result).unwrap();
    assert_eq!(text.matches("\"label\"").count(), 2);
    assert_eq!(text.matches("\"isDefault\"").count(), 2);
    assert!(!text.contains("Old"));

    let entries: Vec<AdaptedFontRecord> = serde_json::from_str(&text).unwrap();
    let defaults: Vec<_> = entries.iter().map(|e| (e.label.as_str(), e.is_default)).collect();
    assert_eq!(defaults, vec![("Lato Regular", true), ("Lato Bold", false)]);
}
