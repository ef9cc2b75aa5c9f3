pub mod extract;
pub mod grammar;
pub mod inflection;
pub mod markup;
pub mod parse;
pub mod processor;
pub mod section;

pub use inflection::find_highlight_form;
pub use markup::clean;
pub use parse::{ParsedWord, parse_wikitext};
pub use processor::{decode_word_id, encode_word_id, normalize};
pub use section::extract_section;
