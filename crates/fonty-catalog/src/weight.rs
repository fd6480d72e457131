//! Variant weight scoring
//!
//! Maps directory variant codes (`regular`, `italic`, `700`, `700italic`)
//! onto a shared numeric weight space so one closest-match search can look
//! for either the best upright or the best italic variant.

/// Variant code of the upright normal-weight face
pub const REGULAR: &str = "regular";

/// Variant code of the italic normal-weight face, also the style marker
/// carried by every italic code
pub const ITALIC: &str = "italic";

/// Font weight (100-900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub i64);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Score given to variants of the other style, far outside any
    /// search threshold
    pub const EXCLUDED: FontWeight = FontWeight(10_000);
}

/// Check if a variant code is an italic one
pub fn is_italic(variant: &str) -> bool {
    variant.contains(ITALIC)
}

/// Weight of a variant when looking for the best upright face
///
/// Italic variants score [`FontWeight::EXCLUDED`]; codes with no numeric
/// weight score `None`.
pub fn regular_weight(variant: &str) -> Option<FontWeight> {
    if variant == REGULAR {
        return Some(FontWeight::NORMAL);
    }
    if is_italic(variant) {
        return Some(FontWeight::EXCLUDED);
    }
    leading_integer(variant).map(FontWeight)
}

/// Weight of a variant when looking for the best italic face
///
/// Upright variants score [`FontWeight::EXCLUDED`]; codes with no numeric
/// weight score `None`.
pub fn italic_weight(variant: &str) -> Option<FontWeight> {
    if variant == ITALIC {
        return Some(FontWeight::NORMAL);
    }
    if !is_italic(variant) {
        return Some(FontWeight::EXCLUDED);
    }
    leading_integer(variant).map(FontWeight)
}

/// Parse the base-10 integer at the start of `text`
///
/// Leading whitespace and a sign are accepted, anything after the digits is
/// ignored (`"700italic"` is 700).
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
