use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFC, composed umlauts)
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct GermanPreprocessor;
impl Preprocessor for GermanPreprocessor {}
