/// Normalize a district label for joining across sources.
///
/// Upper-cases the label, rewrites every hyphen in the `" - "` form and
/// collapses whitespace, so `"Ang Mo Kio-Hougang"` and
/// `"ANG MO KIO - HOUGANG"` compare equal.
pub fn normalize_label(raw: &str) -> String {
    let spaced = raw.to_uppercase()
        .split('-')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" - ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
