use once_cell::sync::Lazy;
use regex::Regex;

use wortschatz_types::{Conjugation, Genus};

use crate::markup::clean;

static GENUS_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"Genus\s*=\s*([mfn])").unwrap());
static GENUS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Wortart\|Substantiv\|Deutsch\}\}[^\n]*\{\{([mfn])\}\}").unwrap());

static PLURAL_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Nominativ Plural\s*=\s*([^\n|]+)").unwrap());
static PLURAL_ABBREV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{Pl\.\}\}\s*([^\n]+)").unwrap());

static VERB_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Wortart\|Verb\|Deutsch").unwrap());
static PRESENT_THIRD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Präsens_er[^=]*=\s*([^\n|]+)").unwrap());
static PAST_SIMPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Präteritum_ich[^=]*=\s*([^\n|]+)").unwrap());
static PAST_PARTICIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Partizip II[^=]*=\s*([^\n|]+)").unwrap());
static AUXILIARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"Hilfsverb[^=]*=\s*([^\n|]+)").unwrap());

/// Grammatical gender from the noun overview template's `Genus` field,
/// falling back to a bare `{{m}}`/`{{f}}`/`{{n}}` marker on the part of
/// speech header line.
pub fn extract_genus(text: &str) -> Option<Genus> {
    GENUS_FIELD
        .captures(text)
        .or_else(|| GENUS_MARKER.captures(text))
        .and_then(|captures| Genus::from_marker(&captures[1]))
}

/// Nominative plural from the noun overview template. A dash value means
/// the noun has no plural and yields `None`, as does an absent field. The
/// `{{Pl.}}` abbreviation elsewhere in the document is the fallback, with
/// only the first comma-separated alternative kept.
pub fn extract_plural(text: &str) -> Option<String> {
    if let Some(captures) = PLURAL_FIELD.captures(text) {
        let plural = captures[1].trim();
        if plural == "—" || plural == "-" || plural == "–" {
            return None;
        }
        let plural = clean(plural);
        return (!plural.is_empty()).then_some(plural);
    }

    let captures = PLURAL_ABBREV.captures(text)?;
    let first = captures[1].split(',').next().unwrap_or("").trim();
    let plural = clean(first);
    (!plural.is_empty()).then_some(plural)
}

/// Verb forms from the verb overview template. `None` when the page is not
/// a German verb or when none of the three primary forms is present; the
/// auxiliary defaults to "haben".
pub fn extract_conjugation(text: &str) -> Option<Conjugation> {
    if !VERB_HEADER.is_match(text) {
        return None;
    }

    let field = |regex: &Regex| {
        regex
            .captures(text)
            .map(|captures| captures[1].trim().to_string())
            .unwrap_or_default()
    };

    let present_third = field(&PRESENT_THIRD);
    let past_simple = field(&PAST_SIMPLE);
    let past_participle = field(&PAST_PARTICIPLE);
    let auxiliary = field(&AUXILIARY);

    if present_third.is_empty() && past_simple.is_empty() && past_participle.is_empty() {
        return None;
    }

    let auxiliary = if auxiliary.is_empty() {
        "haben".to_string()
    } else {
        clean(&auxiliary)
    };

    Some(Conjugation {
        present_third: clean(&present_third),
        past_simple: clean(&past_simple),
        past_participle: clean(&past_participle),
        auxiliary,
    })
}
