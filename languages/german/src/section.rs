use once_cell::sync::Lazy;
use regex::Regex;

// A new top-level section starts on a line opening a template whose name
// begins with an uppercase letter (German headers included).
static NEXT_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new("\n\\{\\{[A-ZÄÖÜ]").unwrap());

/// Extract the text block belonging to a `{{marker}}` section.
///
/// The block starts right after the first occurrence of the literal
/// marker template and ends before the next top-level section marker, or
/// at end of text. Returns `None` when the marker is absent.
///
/// Matching is case-sensitive and single-shot: a document repeating the
/// same marker is unsupported, only the first occurrence is considered.
pub fn extract_section(wikitext: &str, marker: &str) -> Option<String> {
    let token = format!("{{{{{marker}}}}}");
    let start = wikitext.find(&token)? + token.len();
    let rest = &wikitext[start..];

    let end = NEXT_SECTION.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}
