pub mod types;

pub use types::{Conjugation, Definition, DictionaryEntry, Example, Genus, WordRecord};
