use std::collections::HashSet;

use rand::seq::SliceRandom;

use wortschatz_core::WordSource;

/// Showcase words for a start page.
const FEATURED_WORDS: [&str; 20] = [
    "Wanderlust",
    "Gemütlichkeit",
    "Schadenfreude",
    "Zeitgeist",
    "Kindergarten",
    "Fernweh",
    "Weltanschauung",
    "Sehnsucht",
    "Geborgenheit",
    "Frühling",
    "Schmetterling",
    "Augenblick",
    "Feierabend",
    "Backpfeifengesicht",
    "Torschlusspanik",
    "Fingerspitzengefühl",
    "Fremdschämen",
    "Kopfkino",
    "Luftschloss",
    "Ohrwurm",
];

// Common stems that fan out into many compound words.
const SEARCH_PREFIXES: [&str; 20] = [
    "Haus", "Berg", "Wasser", "Licht", "Freund", "Nacht", "Sonne", "Wald", "Blume", "Stein",
    "Wind", "Feuer", "Erde", "Herz", "Gold", "Stern", "Traum", "Garten", "Musik", "Kunst",
];

const RESULTS_PER_PREFIX: usize = 8;

pub fn featured_words() -> &'static [&'static str] {
    &FEATURED_WORDS
}

/// Gather a varied set of words by searching a few randomly chosen
/// prefixes. Per-prefix failures are skipped; the result is deduplicated
/// in first-seen order and capped at `count`.
pub async fn random_words<S>(source: &S, count: usize) -> Vec<String>
where
    S: WordSource + ?Sized,
{
    let mut prefixes = SEARCH_PREFIXES.to_vec();
    prefixes.shuffle(&mut rand::thread_rng());

    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for prefix in prefixes.into_iter().take(count.div_ceil(3)) {
        let titles = match source.search_titles(prefix, RESULTS_PER_PREFIX).await {
            Ok(titles) => titles,
            Err(error) => {
                tracing::debug!("discovery search for {prefix:?} failed: {error}");
                continue;
            }
        };

        for title in titles {
            if seen.insert(title.clone()) {
                words.push(title);
            }
        }
    }

    words.truncate(count);
    words
}
