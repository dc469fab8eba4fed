pub mod extractor;
pub mod types;

pub use extractor::extract_text;
pub use types::ExtractedText;
