use serde::{Deserialize, Serialize};

/// Visible text pulled from a landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedText {
    pub url: String,
    pub title: Option<String>,
    pub text: String,
    /// Character count of `text`.
    pub chars: usize,
}

impl ExtractedText {
    pub fn new(url: impl Into<String>, title: Option<String>, text: String) -> Self {
        let chars = text.chars().count();
        Self {
            url: url.into(),
            title,
            text,
            chars,
        }
    }
}
