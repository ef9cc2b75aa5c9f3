use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"''+").unwrap());
static WIKILINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(?:[^|\]]*\|)?([^\]]+)\]\]").unwrap());
static TEMPLATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{[^}]*\}\}").unwrap());
static STRAY_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\]]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static REF_PAIRED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<ref[^>]*>.*?</ref>").unwrap());
static REF_SELF_CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ref[^>]*/>").unwrap());

/// Strip wiki markup from a text fragment, leaving plain text.
///
/// Removes emphasis markers, unwraps `[[target|display]]` links to their
/// display text, drops `{{...}}` templates and stray square brackets, and
/// collapses whitespace. Total and idempotent; unmatched markup passes
/// through unchanged.
pub fn clean(raw: &str) -> String {
    let text = EMPHASIS.replace_all(raw, "");
    let text = WIKILINK.replace_all(&text, "$1");
    let text = TEMPLATE.replace_all(&text, "");
    let text = STRAY_BRACKETS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Remove citation markup, both paired `<ref>...</ref>` blocks and
/// self-closing `<ref ... />` tags.
pub fn strip_references(text: &str) -> String {
    let text = REF_PAIRED.replace_all(text, "");
    REF_SELF_CLOSING.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_emphasis_markers() {
        assert_eq!(clean("''kursiv'' und '''fett'''"), "kursiv und fett");
    }

    #[test]
    fn unwraps_links_to_display_text() {
        assert_eq!(clean("[[Haus|Häuser]] am [[See]]"), "Häuser am See");
    }

    #[test]
    fn drops_templates_and_stray_brackets() {
        assert_eq!(clean("{{K|ugs.}} ein [Wort]"), "ein Wort");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean("  viel \t Raum \n hier  "), "viel Raum hier");
    }

    #[test]
    fn clean_is_idempotent() {
        let samples = [
            "''kursiv'' {{K|ugs.}} [[Haus|Häuser]] [rest]",
            "plain text",
            "{{unclosed",
            "[[broken|",
            "a  b\tc",
        ];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn strips_paired_and_self_closing_refs() {
        let text = "Satz.<ref name=\"a\">Quelle</ref> Noch einer.<ref name=\"b\"/>";
        assert_eq!(strip_references(text), "Satz. Noch einer.");
    }

    #[test]
    fn paired_ref_spanning_lines() {
        let text = "Satz.<ref>Quelle\nzweite Zeile</ref>";
        assert_eq!(strip_references(text), "Satz.");
    }
}
