//! Listing sort options and request URLs

use std::fmt;

use url::Url;

use crate::Result;

/// Endpoint of the directory listing
pub const WEBFONTS_ENDPOINT: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Sort orders supported by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Trending,
    Popularity,
    Date,
    Alpha,
}

impl SortOrder {
    /// All sort orders, in the directory's order
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Trending,
        SortOrder::Popularity,
        SortOrder::Date,
        SortOrder::Alpha,
    ];

    /// Name used in requests
    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::Trending => "trending",
            SortOrder::Popularity => "popularity",
            SortOrder::Date => "date",
            SortOrder::Alpha => "alpha",
        }
    }

    /// Parse a sort name
    pub fn from_name(name: &str) -> Option<SortOrder> {
        Self::ALL.into_iter().find(|order| order.name() == name)
    }

    /// Parse a sort name, using the first sort order for unknown names
    pub fn from_name_or_default(name: &str) -> SortOrder {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown sort order {:?}, using {}", name, SortOrder::default());
            SortOrder::default()
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URL of the listing for an API key and sort order
pub fn catalog_url(key: &str, sort: SortOrder) -> Result<Url> {
    let mut url = Url::parse(WEBFONTS_ENDPOINT)?;
    url.query_pairs_mut()
        .append_pair("sort", sort.name())
        .append_pair("key", key);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(SortOrder::from_name("date"), Some(SortOrder::Date));
        assert_eq!(SortOrder::from_name("Date"), None);
        assert_eq!(SortOrder::from_name_or_default("newest"), SortOrder::Trending);
        assert_eq!(SortOrder::from_name_or_default("alpha"), SortOrder::Alpha);
    }

    #[test]
    fn test_names_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_name(&order.to_string()), Some(order));
        }
    }

    #[test]
    fn test_catalog_url() {
        let url = catalog_url("abc123", SortOrder::Popularity).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/webfonts/v1/webfonts?sort=popularity&key=abc123"
        );
    }

    #[test]
    fn test_catalog_url_encodes_key() {
        let url = catalog_url("a b&c", SortOrder::Trending).unwrap();
        let key = url.query_pairs().find(|(k, _)| k == "key").map(|(_, v)| v.into_owned());
        assert_eq!(key.as_deref(), Some("a b&c"));
        assert!(!url.as_str().contains("a b&c"));
    }
}
