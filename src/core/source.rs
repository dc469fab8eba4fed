use crate::config::LinkConfig;
use crate::error::{RequestError, ZentaoError};
use crate::links::extract_text;
use std::path::PathBuf;

/// Where the copy to evaluate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopySource {
    Text(String),
    Url(String),
    File(PathBuf),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CopySource {
    /// Exactly one of the three must be given; blank values count as absent.
    pub fn from_parts(
        text: Option<String>,
        url: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Self, RequestError> {
        let text = non_blank(text);
        let url = non_blank(url);
        match (text, url, file) {
            (Some(text), None, None) => Ok(Self::Text(text)),
            (None, Some(url), None) => Ok(Self::Url(url)),
            (None, None, Some(path)) => Ok(Self::File(path)),
            (None, None, None) => Err(RequestError::EmptyInput),
            _ => Err(RequestError::AmbiguousInput),
        }
    }

    /// HTTP body form: a non-empty `url` wins over `texto`.
    pub fn from_request(texto: Option<String>, url: Option<String>) -> Self {
        match non_blank(url) {
            Some(url) => Self::Url(url),
            None => Self::Text(texto.unwrap_or_default()),
        }
    }

    /// Load the text, trimmed. Blank text is `RequestError::EmptyInput`.
    pub async fn resolve(&self, links: &LinkConfig) -> Result<String, ZentaoError> {
        let text = match self {
            Self::Text(text) => text.clone(),
            Self::Url(url) => extract_text(url, links).await?.text,
            Self::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                ZentaoError::Other(anyhow::anyhow!("failed to read {}: {e}", path.display()))
            })?,
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(RequestError::EmptyInput.into());
        }
        Ok(text.to_string())
    }
}
