/// Similarity awarded when one normalized string contains the other
pub const SUBSTRING_SIMILARITY: f64 = 0.8;

/// Tokens this short never count as a match in token overlap
const MIN_TOKEN_LEN: usize = 3;

/// Normalize a string for fuzzy comparison
///
/// Lower-cases, trims, then drops every character outside `[a-z0-9]` and
/// whitespace. Trimming happens before punctuation is dropped, so stripped
/// punctuation can leave leading or trailing whitespace behind.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Compare two free-text strings, returning a similarity in `[0, 1]`
///
/// Tiers, cheapest first:
/// 1. equal after normalization: `1.0`
/// 2. one contains the other: `0.8`
/// 3. token overlap: tokens longer than two characters match when equal or
///    when one contains the other, at most once per left token, divided by
///    the longer token list
///
/// An empty string is contained in every string, so empty vs non-empty
/// lands in tier 2.
pub fn similarity(a: &str, b: &str) -> f64 {
    let s1 = normalize(a);
    let s2 = normalize(b);

    if s1 == s2 {
        return 1.0;
    }
    if s1.contains(s2.as_str()) || s2.contains(s1.as_str()) {
        return SUBSTRING_SIMILARITY;
    }

    let words1 = split_tokens(&s1);
    let words2 = split_tokens(&s2);

    let match_count = words1
        .iter()
        .filter(|w1| {
            words2.iter().any(|w2| {
                w1.len() >= MIN_TOKEN_LEN
                    && w2.len() >= MIN_TOKEN_LEN
                    && (w1.contains(*w2) || w2.contains(**w1))
            })
        })
        .count();

    match_count as f64 / words1.len().max(words2.len()) as f64
}

/// Split on whitespace runs, keeping one empty token for a leading or
/// trailing run so that token counts line up with a regex `\s+` split.
fn split_tokens(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return vec![""];
    }

    let mut tokens = Vec::new();
    if s.starts_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens.extend(s.split_whitespace());
    if s.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens
}
