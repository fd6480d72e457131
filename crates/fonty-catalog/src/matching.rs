//! Closest weight matching and default variant resolution

use crate::record::FontRecord;
use crate::weight::{FontWeight, italic_weight, regular_weight};

/// Closest-weight query over a list of variants
///
/// The default median sits just above [`FontWeight::NORMAL`] so that
/// `regular` beats both 300 and 500, and the default threshold rejects
/// [`FontWeight::EXCLUDED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightQuery {
    /// Target weight
    pub median: i64,
    /// Largest accepted distance from the median
    pub threshold: u64,
}

impl WeightQuery {
    pub const DEFAULT_MEDIAN: i64 = 449;
    pub const DEFAULT_THRESHOLD: u64 = 1000;

    /// Create a query with the default median and threshold
    pub fn new() -> Self {
        Self {
            median: Self::DEFAULT_MEDIAN,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Set the target weight
    pub fn median(mut self, median: i64) -> Self {
        self.median = median;
        self
    }

    /// Set the largest accepted distance
    ///
    /// Zero selects [`Self::DEFAULT_THRESHOLD`].
    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = if threshold == 0 {
            Self::DEFAULT_THRESHOLD
        } else {
            threshold
        };
        self
    }

    /// Find the variant whose score is closest to the median
    ///
    /// Ties go to the variant listed last. Variants without a score are
    /// skipped. Returns `None` when nothing is within the threshold.
    pub fn find<'a, S>(&self, variants: &'a [String], scorer: S) -> Option<&'a str>
    where
        S: Fn(&str) -> Option<FontWeight>,
    {
        let mut best_diff = self.threshold;
        let mut best = None;

        for variant in variants {
            let Some(weight) = scorer(variant) else {
                continue;
            };
            let diff = weight.0.abs_diff(self.median);
            if diff <= best_diff {
                best_diff = diff;
                best = Some(variant.as_str());
            }
        }

        best.filter(|v| !v.is_empty())
    }
}

impl Default for WeightQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the variant closest to `median` with the given scorer
pub fn find_closest<'a, S>(variants: &'a [String], median: i64, scorer: S, threshold: u64) -> Option<&'a str>
where
    S: Fn(&str) -> Option<FontWeight>,
{
    WeightQuery::new().median(median).threshold(threshold).find(variants, scorer)
}

/// Pick the variant of a family that stands for the family as a whole
///
/// Prefers the upright variant closest to normal weight, then the closest
/// italic one, then the first listed variant. Only a record without variants
/// yields `None`.
pub fn resolve_default_variant(record: &FontRecord) -> Option<&str> {
    let query = WeightQuery::new();
    let variants = &record.variants;

    query
        .find(variants, regular_weight)
        .or_else(|| query.find(variants, italic_weight))
        .or_else(|| variants.first().map(String::as_str))
}
