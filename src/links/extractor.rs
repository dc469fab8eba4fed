use super::types::ExtractedText;
use crate::config::LinkConfig;
use crate::error::FetchError;
use crate::utils::text::truncate_with_ellipsis;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text never counts as copy.
const SKIPPED_ELEMENTS: [&str; 6] = ["script", "style", "head", "footer", "nav", "aside"];

/// Fetch `url` and extract the visible text for evaluation.
pub async fn extract_text(url: &str, config: &LinkConfig) -> Result<ExtractedText, FetchError> {
    let parsed = parse_url(url)?;
    tracing::debug!(url = %parsed, "fetching copy source");

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let response = client
        .get(parsed.as_str())
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %parsed, status = status.as_u16(), "copy source returned error status");
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("text/html"));

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let (title, text) = if is_html || looks_like_html(&body) {
        extract_from_html(&body)
    } else {
        (None, body.trim().to_string())
    };

    if text.is_empty() {
        return Err(FetchError::NoVisibleText);
    }

    let text = truncate_with_ellipsis(&text, config.max_content_chars);
    let extracted = ExtractedText::new(parsed.as_str(), title, text);
    tracing::info!(url = %extracted.url, chars = extracted.chars, "extracted copy from page");
    Ok(extracted)
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "esquema no soportado: {other}"
        ))),
    }
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body.trim_start().chars().take(256).collect();
    let head = head.to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

fn extract_from_html(html: &str) -> (Option<String>, String) {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let mut chunks: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if skipped {
            continue;
        }
        for line in text.lines() {
            chunks.extend(
                line.trim()
                    .split("  ")
                    .map(str::trim)
                    .filter(|chunk| !chunk.is_empty()),
            );
        }
    }

    (title, chunks.join("\n"))
}
