use chrono::Utc;

use wortschatz_types::{Definition, DictionaryEntry, Example, WordRecord};

use crate::inflection::find_highlight_form;
use crate::parse::ParsedWord;

/// Separator used by Wiktionary's Worttrennung syllable strings.
pub const SYLLABLE_SEPARATOR: char = '·';

const MAX_SYNONYMS: usize = 8;
const MAX_ANTONYMS: usize = 6;
const NOUN: &str = "Substantiv";
const VERB: &str = "Verb";

/// Assemble a `DictionaryEntry` from extracted fields.
///
/// Returns `None` for unusable entries, i.e. those without a single
/// definition. Grammatical gender and plural are attached to nouns only,
/// conjugation to verbs only.
pub fn normalize(parsed: ParsedWord) -> Option<DictionaryEntry> {
    if parsed.definitions.is_empty() {
        return None;
    }

    let word_id = encode_word_id(&parsed.word);
    let is_noun = parsed.word_type == NOUN;
    let is_verb = parsed.word_type == VERB;

    let word = WordRecord {
        id: word_id.clone(),
        word: parsed.word.clone(),
        pronunciation: pronunciation_display(&parsed.syllables, &parsed.word),
        syllables: parsed.syllables.clone(),
        category: category_for(&parsed.word_type),
        difficulty: difficulty_for(&parsed.syllables, &parsed.word),
        word_type: parsed.word_type,
        genus: parsed.genus.filter(|_| is_noun),
        plural: parsed.plural.filter(|_| is_noun),
        conjugation: parsed.conjugation.filter(|_| is_verb),
        synonyms: parsed.synonyms.into_iter().take(MAX_SYNONYMS).collect(),
        antonyms: parsed.antonyms.into_iter().take(MAX_ANTONYMS).collect(),
        created_at: Utc::now(),
    };

    let definitions = parsed
        .definitions
        .into_iter()
        .enumerate()
        .map(|(i, text)| Definition {
            id: format!("{word_id}-d{i}"),
            word_id: word_id.clone(),
            text,
            order: (i + 1) as u32,
        })
        .collect();

    let examples = parsed
        .examples
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let highlighted_word = find_highlight_form(&text, &word.word);
            Example {
                id: format!("{word_id}-e{i}"),
                word_id: word_id.clone(),
                text,
                highlighted_word,
                order: (i + 1) as u32,
            }
        })
        .collect();

    Some(DictionaryEntry {
        word,
        definitions,
        examples,
    })
}

/// Stable identifier for a word, percent-encoded so that
/// `decode_word_id` recovers the exact surface form.
pub fn encode_word_id(word: &str) -> String {
    format!("wk-{}", encode_component(word))
}

/// Recover the surface form from an id produced by `encode_word_id`.
pub fn decode_word_id(id: &str) -> Option<String> {
    decode_component(id.strip_prefix("wk-")?)
}

// Percent-encoding with the encodeURIComponent unreserved set, so ids are
// compatible with those minted by the web client.
fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

fn decode_component(text: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut iter = text.bytes();
    while let Some(byte) = iter.next() {
        if byte == b'%' {
            let pair = [iter.next()?, iter.next()?];
            let pair = std::str::from_utf8(&pair).ok()?;
            bytes.push(u8::from_str_radix(pair, 16).ok()?);
        } else {
            bytes.push(byte);
        }
    }
    String::from_utf8(bytes).ok()
}

/// Coarse semantic bucket for a part of speech. Unknown word types pass
/// through unchanged; an empty word type becomes "Allgemein".
fn category_for(word_type: &str) -> String {
    let category = match word_type {
        "Adjektiv" => "Beschreibend",
        "Substantiv" => "Gegenstand",
        "Verb" => "Handlung",
        "Adverb" => "Umstand",
        "Konjunktion" => "Verbindung",
        "Präposition" => "Verhältnis",
        "Interjektion" => "Ausruf",
        "Pronomen" => "Stellvertretung",
        "Artikel" => "Begleiter",
        "Numerale" => "Zahl",
        "Partikel" => "Partikel",
        "" => "Allgemein",
        other => other,
    };
    category.to_string()
}

/// Difficulty estimate from syllable count and word length, in 1..=5.
fn difficulty_for(syllables: &str, word: &str) -> u8 {
    let syllable_count = syllables.matches(SYLLABLE_SEPARATOR).count() + 1;
    let long_word_bonus = if word.chars().count() > 12 { 1 } else { 0 };
    let difficulty = (syllable_count as f64 * 0.8).ceil() as i64 + long_word_bonus;
    difficulty.clamp(1, 5) as u8
}

/// Human-readable syllable display, "er - staun - lich". Words without
/// syllable data are spaced out character by character.
fn pronunciation_display(syllables: &str, word: &str) -> String {
    if syllables.is_empty() {
        word.chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        syllables.replace(SYLLABLE_SEPARATOR, " - ")
    }
}
