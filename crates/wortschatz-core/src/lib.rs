pub mod error;
pub mod preprocess;
pub mod source;

pub use error::SourceError;
pub use preprocess::{GermanPreprocessor, Preprocessor};
pub use source::{SourceMetadata, WordSource};
