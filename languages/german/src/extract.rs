use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::{clean, strip_references};
use crate::section::extract_section;

static WORD_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{Wortart\|([^|]+)\|Deutsch\}\}").unwrap());
static IPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{Lautschrift\|([^}]+)\}\}").unwrap());
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:\[?\d").unwrap());
static LINE_NUMBERING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:\[?\d+\]?\s*").unwrap());
static QUOTE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new("[„“”«»]").unwrap());
static WIKILINK_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]|]+?)(?:\|[^\]]+)?\]\]").unwrap());
static TRANSLATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{Üt?\|(\w{2})\|([^}|]+)").unwrap());

const MAX_EXAMPLES: usize = 4;
const MAX_LINKED_WORDS: usize = 12;
// Examples at or below this length are parse noise, not sentences.
const MIN_EXAMPLE_CHARS: usize = 10;
const MAX_LINK_TARGET_CHARS: usize = 40;

/// Part of speech from the German `{{Wortart|...|Deutsch}}` header,
/// e.g. "Substantiv" or "Verb". Empty when absent.
pub fn extract_word_type(text: &str) -> String {
    WORD_TYPE
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

/// IPA transcription from the first `{{Lautschrift|...}}` template.
pub fn extract_pronunciation(text: &str) -> String {
    IPA.captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

/// Syllable string from the "Worttrennung" section, e.g. "er·staun·lich".
/// Only the base form before the first comma is kept; comparative and
/// plural variants listed after it are ignored.
pub fn extract_syllables(text: &str) -> String {
    let Some(section) = extract_section(text, "Worttrennung") else {
        return String::new();
    };

    let line = section.lines().next().unwrap_or("");
    let line = line.strip_prefix(':').unwrap_or(line).trim();
    let base = line.split(',').next().unwrap_or("").trim();
    clean(base)
}

/// Numbered sense lines from the "Bedeutungen" section, cleaned, in
/// source order.
pub fn extract_definitions(text: &str) -> Vec<String> {
    let Some(section) = extract_section(text, "Bedeutungen") else {
        return Vec::new();
    };

    section
        .lines()
        .filter(|line| NUMBERED_LINE.is_match(line))
        .map(|line| clean(&LINE_NUMBERING.replace(line, "")))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Numbered usage sentences from the "Beispiele" section. Citation markup
/// and quote characters are removed before cleaning; short leftovers are
/// dropped and the result is capped at four sentences.
pub fn extract_examples(text: &str) -> Vec<String> {
    let Some(section) = extract_section(text, "Beispiele") else {
        return Vec::new();
    };

    section
        .lines()
        .filter(|line| NUMBERED_LINE.is_match(line))
        .map(|line| {
            let line = LINE_NUMBERING.replace(line, "");
            let line = strip_references(&line);
            let line = QUOTE_CHARS.replace_all(&line, "");
            clean(&line).trim().to_string()
        })
        .filter(|example| example.chars().count() > MIN_EXAMPLE_CHARS)
        .take(MAX_EXAMPLES)
        .collect()
}

/// Synonyms from "Sinnverwandte Wörter", falling back to "Synonyme".
pub fn extract_synonyms(text: &str) -> Vec<String> {
    extract_section(text, "Sinnverwandte Wörter")
        .or_else(|| extract_section(text, "Synonyme"))
        .map(|section| linked_words(&section))
        .unwrap_or_default()
}

/// Antonyms from the "Gegenwörter" section.
pub fn extract_antonyms(text: &str) -> Vec<String> {
    extract_section(text, "Gegenwörter")
        .map(|section| linked_words(&section))
        .unwrap_or_default()
}

/// Translations from `{{Ü|xx|...}}` / `{{Üt|xx|...}}` templates across the
/// whole document, keyed by two-letter language code. The first occurrence
/// per code wins.
pub fn extract_translations(text: &str) -> BTreeMap<String, String> {
    let mut translations = BTreeMap::new();
    for captures in TRANSLATION.captures_iter(text) {
        let lang = captures[1].to_string();
        translations
            .entry(lang)
            .or_insert_with(|| captures[2].to_string());
    }
    translations
}

/// Collect wikilink targets from a section, skipping namespaced and
/// cross-wiki links as well as overlong targets. First-seen order is kept;
/// duplicates are dropped.
fn linked_words(section: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for captures in WIKILINK_TARGET.captures_iter(section) {
        let word = captures[1].trim();
        if word.is_empty()
            || word.contains(':')
            || word.starts_with("w:")
            || word.chars().count() >= MAX_LINK_TARGET_CHARS
        {
            continue;
        }
        if seen.insert(word.to_string()) {
            words.push(word.to_string());
        }
        if words.len() == MAX_LINKED_WORDS {
            break;
        }
    }

    words
}
