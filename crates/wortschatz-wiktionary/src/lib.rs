mod client;
mod discover;
mod search;

pub use client::WiktionaryClient;
pub use discover::{featured_words, random_words};
pub use search::{fetch_word, search_words};
