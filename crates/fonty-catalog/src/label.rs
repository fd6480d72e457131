//! Human readable variant names

/// Display name of a directory variant code
///
/// Returns `None` for codes outside the standard nine weights.
pub fn label_suffix(variant: &str) -> Option<&'static str> {
    let name = match variant {
        "100" => "Thin",
        "100italic" => "Thin Italic",
        "200" => "Extra-Light",
        "200italic" => "Extra-Light Italic",
        "300" => "Light",
        "300italic" => "Light Italic",
        "regular" => "Regular",
        "italic" => "Regular Italic",
        "500" => "Medium",
        "500italic" => "Medium Italic",
        "600" => "Semi-Bold",
        "600italic" => "Semi-Bold Italic",
        "700" => "Bold",
        "700italic" => "Bold Italic",
        "800" => "Extra-Bold",
        "800italic" => "Extra-Bold Italic",
        "900" => "Black",
        "900italic" => "Black Italic",
        _ => return None,
    };
    Some(name)
}

/// Label of one variant of a family, e.g. `"Roboto Bold Italic"`
///
/// Unknown codes get the bare family name.
pub fn variant_label(family: &str, variant: &str) -> String {
    match label_suffix(variant) {
        Some(suffix) => format!("{family} {suffix}"),
        None => family.to_string(),
    }
}
