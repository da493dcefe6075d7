use unicode_normalization::UnicodeNormalization;

/// Fold text for case-insensitive matching: NFKC, then lower case.
///
/// Arabic has no case, so only the normalization step affects it.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
