use futures_util::future::join_all;

use wortschatz_core::{GermanPreprocessor, Preprocessor, WordSource};
use wortschatz_lang_german::{normalize, parse_wikitext};
use wortschatz_types::DictionaryEntry;

/// How many candidate titles the remote search is asked for.
const SEARCH_CANDIDATES: usize = 15;
/// How many of those candidates are fetched and parsed.
const FETCH_LIMIT: usize = 8;
const MIN_QUERY_CHARS: usize = 2;

/// Search the source for entries matching a free-text query.
///
/// Queries shorter than two characters return an empty list without any
/// remote call. The top candidates are fetched concurrently; a failing or
/// unusable candidate is dropped without affecting the others, and the
/// survivors come back in the order the remote search ranked them.
pub async fn search_words<S>(source: &S, query: &str) -> Vec<DictionaryEntry>
where
    S: WordSource + ?Sized,
{
    let query = GermanPreprocessor.process(query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let titles = match source.search_titles(&query, SEARCH_CANDIDATES).await {
        Ok(titles) => titles,
        Err(error) => {
            tracing::warn!("title search for {query:?} failed: {error}");
            return Vec::new();
        }
    };

    let fetches = titles
        .iter()
        .take(FETCH_LIMIT)
        .map(|title| fetch_word(source, title));

    join_all(fetches).await.into_iter().flatten().collect()
}

/// Fetch and parse a single word.
///
/// Transport failures, missing pages and entries without extractable
/// definitions all come back as `None`; callers cannot (and need not)
/// distinguish them.
pub async fn fetch_word<S>(source: &S, word: &str) -> Option<DictionaryEntry>
where
    S: WordSource + ?Sized,
{
    let wikitext = match source.fetch_wikitext(word).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::debug!("no page for {word:?}");
            return None;
        }
        Err(error) => {
            tracing::debug!("fetch for {word:?} failed: {error}");
            return None;
        }
    };

    normalize(parse_wikitext(word, &wikitext))
}
