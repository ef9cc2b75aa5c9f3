/// Locate the form of `base_word` used in `sentence`, for emphasis.
///
/// A token exactly matching the base word wins. Otherwise the sentence's
/// tokens are checked for a stem-prefix match covering common German
/// inflections (the stem is the word minus up to its last three
/// characters, at least three characters long) and the first matching
/// token is returned, so "Hauses" is found for "Haus". Falls back to the
/// base word itself so the result is always populated, even when the word
/// does not occur in the sentence.
pub fn find_highlight_form(sentence: &str, base_word: &str) -> String {
    let tokens: Vec<String> = sentence
        .split_whitespace()
        .map(|token| token.chars().filter(|c| !is_edge_punct(*c)).collect())
        .collect();

    if tokens.iter().any(|token| token == base_word) {
        return base_word.to_string();
    }

    let lower = base_word.to_lowercase();
    let stem_chars = lower.chars().count().saturating_sub(3).max(3);
    let stem: String = lower.chars().take(stem_chars).collect();

    for token in tokens {
        if token.to_lowercase().starts_with(&stem) {
            return token;
        }
    }

    base_word.to_string()
}

fn is_edge_punct(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"' | '„' | '“' | '”')
}
