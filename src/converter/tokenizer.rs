use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace, underscores and hyphens all delimit words
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_\-]+").unwrap();
    static ref PUNCTUATION_RUN: Regex = Regex::new(r"[[:punct:]]+").unwrap();
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
}

/// Split free-form text into its ordered word tokens.
///
/// Every returned token is non-empty and made of ASCII letters and digits
/// only; case is left untouched so the style joiners decide it.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = SEPARATOR_RUN.replace_all(text.trim(), " ");

    normalized
        .split(' ')
        .flat_map(|candidate| PUNCTUATION_RUN.split(candidate))
        .map(|word| NON_ALPHANUMERIC.replace_all(word, "").into_owned())
        .filter(|word| !word.is_empty())
        .collect()
}
