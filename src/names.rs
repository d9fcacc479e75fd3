//! Display-name comparison keys.
//!
//! Normalization is deliberately shallow: lowercase plus trim. The sources
//! all spell players the way ESPN does, so anything stronger (diacritic
//! folding, edit distance) would add merge risk without catching real
//! variants. Normalized forms are comparison keys only and are never
//! written to output in place of the display name.

/// Lowercased, whitespace-trimmed comparison key for a display name.
pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Final whitespace-delimited token of the normalized name, i.e. the
/// surname for the common "First Last" shape.
pub fn surname(input: &str) -> Option<String> {
    let normalized = normalize_name(input);
    normalized.split_whitespace().last().map(str::to_string)
}
