use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grammatical gender of a German noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genus {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
    #[serde(rename = "n")]
    Neuter,
}

impl Genus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genus::Masculine => "m",
            Genus::Feminine => "f",
            Genus::Neuter => "n",
        }
    }

    /// Parse the single-letter marker used by the noun overview template.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "m" => Some(Genus::Masculine),
            "f" => Some(Genus::Feminine),
            "n" => Some(Genus::Neuter),
            _ => None,
        }
    }
}

/// Core verb forms from the verb overview template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    /// Third person singular present ("er/sie/es ...")
    pub present_third: String,
    /// First person singular simple past
    pub past_simple: String,
    pub past_participle: String,
    /// "haben" or "sein"
    pub auxiliary: String,
}

/// A single lexical entry.
///
/// `genus` and `plural` are populated for nouns only, `conjugation` for
/// verbs only. `difficulty` is always within 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    /// Display form of the syllable breakdown, e.g. "er - staun - lich"
    pub pronunciation: String,
    /// Raw syllable string with separators, e.g. "er·staun·lich"
    pub syllables: String,
    pub word_type: String,
    /// Coarse semantic bucket derived from the word type
    pub category: String,
    pub difficulty: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<Genus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<Conjugation>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// One sense of a word. `order` is the 1-based source position and is
/// never reordered after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: String,
    pub word_id: String,
    pub text: String,
    pub order: u32,
}

/// One usage sentence. `highlighted_word` is the inflected form of the
/// owning word found in `text`, falling back to the base word when no
/// form matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub word_id: String,
    pub text: String,
    pub highlighted_word: String,
    pub order: u32,
}

/// The aggregate returned by the pipeline: one word with its ordered
/// definitions and examples. Value-like and immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: WordRecord,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
}
