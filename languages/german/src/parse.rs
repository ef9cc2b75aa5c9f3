use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wortschatz_types::{Conjugation, Genus};

use crate::extract::{
    extract_antonyms, extract_definitions, extract_examples, extract_pronunciation,
    extract_synonyms, extract_syllables, extract_translations, extract_word_type,
};
use crate::grammar::{extract_conjugation, extract_genus, extract_plural};

/// Raw field bundle extracted from one article's wikitext, before
/// normalization into a `DictionaryEntry`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedWord {
    pub word: String,
    pub word_type: String,
    /// IPA transcription
    pub pronunciation: String,
    /// Syllable string with `·` separators
    pub syllables: String,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    /// Two-letter language code to translated word
    pub translations: BTreeMap<String, String>,
    pub genus: Option<Genus>,
    pub plural: Option<String>,
    pub conjugation: Option<Conjugation>,
}

/// Run every field extractor over an article's wikitext.
///
/// Extraction never fails: absent sections and templates leave their
/// fields at the empty default.
pub fn parse_wikitext(word: &str, text: &str) -> ParsedWord {
    ParsedWord {
        word: word.to_string(),
        word_type: extract_word_type(text),
        pronunciation: extract_pronunciation(text),
        syllables: extract_syllables(text),
        definitions: extract_definitions(text),
        examples: extract_examples(text),
        synonyms: extract_synonyms(text),
        antonyms: extract_antonyms(text),
        translations: extract_translations(text),
        genus: extract_genus(text),
        plural: extract_plural(text),
        conjugation: extract_conjugation(text),
    }
}
