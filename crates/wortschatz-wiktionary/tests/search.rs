use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use wortschatz_core::{SourceError, SourceMetadata, WordSource};
use wortschatz_wiktionary::{fetch_word, random_words, search_words};

/// What the mock source does when a page is fetched.
enum Page {
    Wikitext(String),
    Missing,
    Fail,
}

#[derive(Default)]
struct MockSource {
    titles: Vec<String>,
    pages: HashMap<String, Page>,
    search_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    fail_search: bool,
}

impl MockSource {
    fn with_pages(pages: Vec<(&str, Page)>) -> Self {
        MockSource {
            titles: pages.iter().map(|(title, _)| title.to_string()).collect(),
            pages: pages
                .into_iter()
                .map(|(title, page)| (title.to_string(), page))
                .collect(),
            ..MockSource::default()
        }
    }
}

#[async_trait::async_trait]
impl WordSource for MockSource {
    async fn search_titles(&self, _query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(SourceError::Api("search unavailable".to_string()));
        }
        Ok(self.titles.iter().take(limit).cloned().collect())
    }

    async fn fetch_wikitext(&self, title: &str) -> Result<Option<String>, SourceError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(title) {
            Some(Page::Wikitext(text)) => Ok(Some(text.clone())),
            Some(Page::Missing) | None => Ok(None),
            Some(Page::Fail) => Err(SourceError::Api("boom".to_string())),
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "mock".to_string(),
            language: "de".to_string(),
            base_url: "http://localhost".to_string(),
        }
    }
}

/// Minimal but realistic article for a word with one definition.
fn article(word: &str) -> String {
    format!(
        "\
== {word} ({{{{Sprache|Deutsch}}}}) ==
=== {{{{Wortart|Substantiv|Deutsch}}}}, {{{{n}}}} ===
{{{{Worttrennung}}}}
:{word}
{{{{Bedeutungen}}}}
:[1] eine Bedeutung von ''{word}''
{{{{Beispiele}}}}
:[1] Ein langer Beispielsatz mit {word} darin.
"
    )
}

const NOUN_ARTICLE: &str = "\
== Haus ({{Sprache|Deutsch}}) ==
=== {{Wortart|Substantiv|Deutsch}}, {{n}} ===
{{Deutsch Substantiv Übersicht
|Genus=f
|Nominativ Singular=Haus
|Nominativ Plural=Häuser
}}
{{Worttrennung}}
:Haus, {{Pl.}} Häu·ser
{{Aussprache}}
:{{IPA}} {{Lautschrift|haʊ̯s}}
{{Bedeutungen}}
:[1] [[Gebäude]], das Menschen als [[Wohnung]] dient
{{Beispiele}}
:[1] Das Dach des Hauses ist schon wieder undicht.
";

#[tokio::test]
async fn short_query_is_rejected_without_remote_calls() {
    let source = MockSource::with_pages(vec![("Haus", Page::Wikitext(article("Haus")))]);

    assert!(search_words(&source, "a").await.is_empty());
    assert!(search_words(&source, "  a  ").await.is_empty());
    assert!(search_words(&source, "").await.is_empty());
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failing_candidates_are_dropped_and_order_is_kept() {
    let source = MockSource::with_pages(vec![
        ("Wort1", Page::Wikitext(article("Wort1"))),
        ("Wort2", Page::Wikitext(article("Wort2"))),
        ("Wort3", Page::Fail),
        ("Wort4", Page::Wikitext(article("Wort4"))),
        ("Wort5", Page::Wikitext(article("Wort5"))),
        ("Wort6", Page::Fail),
        ("Wort7", Page::Wikitext(article("Wort7"))),
        ("Wort8", Page::Wikitext(article("Wort8"))),
    ]);

    let entries = search_words(&source, "Wort").await;
    let words: Vec<&str> = entries.iter().map(|e| e.word.word.as_str()).collect();
    assert_eq!(words, vec!["Wort1", "Wort2", "Wort4", "Wort5", "Wort7", "Wort8"]);
}

#[tokio::test]
async fn only_top_candidates_are_fetched() {
    let pages: Vec<(String, String)> = (1..=12)
        .map(|i| (format!("Wort{i}"), article(&format!("Wort{i}"))))
        .collect();
    let source = MockSource {
        titles: pages.iter().map(|(title, _)| title.clone()).collect(),
        pages: pages
            .into_iter()
            .map(|(title, text)| (title, Page::Wikitext(text)))
            .collect(),
        ..MockSource::default()
    };

    let entries = search_words(&source, "Wort").await;
    assert_eq!(entries.len(), 8);
    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 8);
}

#[tokio::test]
async fn entries_without_definitions_are_filtered() {
    let bare = "=== {{Wortart|Substantiv|Deutsch}} ===\n{{Beispiele}}\n:[1] Ein Satz ohne Bedeutungsteil.";
    let source = MockSource::with_pages(vec![
        ("Gut", Page::Wikitext(article("Gut"))),
        ("Leer", Page::Wikitext(bare.to_string())),
    ]);

    let entries = search_words(&source, "egal").await;
    let words: Vec<&str> = entries.iter().map(|e| e.word.word.as_str()).collect();
    assert_eq!(words, vec!["Gut"]);

    // The same page is "not found" through the single-word path.
    assert!(fetch_word(&source, "Leer").await.is_none());
}

#[tokio::test]
async fn failing_title_search_degrades_to_empty() {
    let source = MockSource {
        fail_search: true,
        ..MockSource::default()
    };

    assert!(search_words(&source, "Haus").await.is_empty());
    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_word_absorbs_missing_pages_and_failures() {
    let source = MockSource::with_pages(vec![
        ("Weg", Page::Missing),
        ("Kaputt", Page::Fail),
    ]);

    assert!(fetch_word(&source, "Weg").await.is_none());
    assert!(fetch_word(&source, "Kaputt").await.is_none());
    assert!(fetch_word(&source, "Unbekannt").await.is_none());
}

#[tokio::test]
async fn noun_round_trip() {
    let source = MockSource::with_pages(vec![("Haus", Page::Wikitext(NOUN_ARTICLE.to_string()))]);

    let entry = fetch_word(&source, "Haus").await.unwrap();
    assert_eq!(entry.word.word, "Haus");
    assert_eq!(entry.word.word_type, "Substantiv");
    assert_eq!(entry.word.genus.map(|g| g.as_str()), Some("f"));
    assert_eq!(entry.word.plural.as_deref(), Some("Häuser"));
    assert_eq!(entry.word.category, "Gegenstand");
    assert_eq!(entry.definitions.len(), 1);
    assert_eq!(
        entry.definitions[0].text,
        "Gebäude, das Menschen als Wohnung dient"
    );
    assert_eq!(entry.examples.len(), 1);
    assert_eq!(entry.examples[0].highlighted_word, "Hauses");
    assert_eq!(entry.word.conjugation, None);
}

#[tokio::test]
async fn verb_without_overview_has_no_conjugation() {
    let verb = "\
=== {{Wortart|Verb|Deutsch}} ===
{{Worttrennung}}
:stau·nen
{{Bedeutungen}}
:[1] große Überraschung empfinden
";
    let source = MockSource::with_pages(vec![("staunen", Page::Wikitext(verb.to_string()))]);

    let entry = fetch_word(&source, "staunen").await.unwrap();
    assert_eq!(entry.word.word_type, "Verb");
    assert_eq!(entry.word.conjugation, None);
    assert_eq!(entry.word.genus, None);
    assert_eq!(entry.word.category, "Handlung");
    assert_eq!(entry.word.syllables, "stau·nen");
    assert_eq!(entry.word.pronunciation, "stau - nen");
    assert_eq!(entry.word.difficulty, 2);
}

#[tokio::test]
async fn discovery_skips_failing_prefixes() {
    let source = MockSource {
        fail_search: true,
        ..MockSource::default()
    };
    assert!(random_words(&source, 9).await.is_empty());
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 3);

    let source = MockSource {
        titles: vec!["Haus".to_string(), "Hausarbeit".to_string()],
        ..MockSource::default()
    };
    let words = random_words(&source, 3).await;
    assert_eq!(words, vec!["Haus", "Hausarbeit"]);
}
