use super::AppState;
use super::wire::EvaluateResponse;
use crate::core::rubric::evaluate;
use crate::core::source::CopySource;
use crate::error::{RequestError, ZentaoError};
use crate::feedback::FeedbackContext;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{Value, json};

/// `POST /evaluar` body; a non-empty `url` wins over `texto`.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateBody {
    #[serde(default)]
    pub texto: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /feedback` body
#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    pub texto: String,
}

fn detail(status: StatusCode, reason: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": reason.to_string() })))
}

fn rejection(err: &JsonRejection) -> (StatusCode, Json<Value>) {
    tracing::debug!(error = %err.body_text(), "rejected request body");
    detail(StatusCode::UNPROCESSABLE_ENTITY, err.body_text())
}

/// GET / and GET /test
pub(super) async fn handle_status() -> impl IntoResponse {
    Json(json!({"status": "success", "message": "API funcionando"}))
}

/// GET /health
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// POST /evaluar
pub(super) async fn handle_evaluate(
    State(state): State<AppState>,
    body: Result<Json<EvaluateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(err) => return rejection(&err),
    };

    let source = CopySource::from_request(body.texto, body.url);
    let text = match source.resolve(&state.links).await {
        Ok(text) => text,
        Err(ZentaoError::Fetch(err)) => {
            tracing::warn!(error = %err, "copy source fetch failed");
            return detail(StatusCode::BAD_REQUEST, err);
        }
        Err(err) => return detail(StatusCode::BAD_REQUEST, err_reason(&err)),
    };

    let result = evaluate(&text);
    tracing::info!(vetoed = result.is_vetoed(), "evaluated copy");
    match serde_json::to_value(EvaluateResponse::from(&result)) {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(err) => detail(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}

/// POST /feedback
pub(super) async fn handle_feedback(
    State(state): State<AppState>,
    body: Result<Json<FeedbackBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(err) => return rejection(&err),
    };

    let text = body.texto.trim();
    if text.is_empty() {
        return detail(StatusCode::BAD_REQUEST, RequestError::EmptyInput);
    }

    let ctx = FeedbackContext::from_evaluation(text, &evaluate(text));
    match state.feedback.critique(&ctx).await {
        Ok(feedback) => (
            StatusCode::OK,
            Json(json!({"status": "success", "feedback": feedback})),
        ),
        Err(err) => {
            tracing::error!(error = %err, "deep feedback failed");
            detail(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
    }
}

/// User-facing reason without the error-category prefix.
fn err_reason(err: &ZentaoError) -> String {
    match err {
        ZentaoError::Request(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkConfig;
    use crate::feedback::DeepFeedback;
    use crate::providers::Provider;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use std::sync::Arc;

    struct FixedProvider(Option<&'static str>);

    #[async_trait]
    impl Provider for FixedProvider {
        async fn chat_with_system(
            &self,
            _system_prompt: Option<&str>,
            _message: &str,
            _model: &str,
            _temperature: f64,
        ) -> anyhow::Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("upstream down"))
        }
    }

    fn state_with(provider: FixedProvider) -> AppState {
        AppState {
            links: Arc::new(LinkConfig::default()),
            feedback: Arc::new(DeepFeedback::new(
                Arc::new(provider),
                "deepseek",
                "deepseek-chat",
                0.7,
            )),
        }
    }

    async fn into_json(response: impl IntoResponse) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn evaluate_body(texto: Option<&str>, url: Option<&str>) -> Result<Json<EvaluateBody>, JsonRejection> {
        Ok(Json(EvaluateBody {
            texto: texto.map(str::to_string),
            url: url.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn status_and_health() {
        let (status, body) = into_json(handle_status().await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "API funcionando");

        let (_, body) = into_json(handle_health().await).await;
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn evaluate_blank_text_is_bad_request() {
        let state = state_with(FixedProvider(Some("ok")));
        let (status, body) =
            into_json(handle_evaluate(State(state), evaluate_body(Some("   "), None)).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Por favor, escribe un texto para evaluar");
    }

    #[tokio::test]
    async fn evaluate_veto_returns_triggers() {
        let state = state_with(FixedProvider(Some("ok")));
        let (status, body) =
            into_json(handle_evaluate(State(state), evaluate_body(Some("hola, compro"), None)).await)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "disparadores");
        assert!(body["disparadores"][0].as_str().unwrap().contains("saludando"));
    }

    #[tokio::test]
    async fn evaluate_scores_text() {
        let state = state_with(FixedProvider(Some("ok")));
        let text = "Compra ya mismo, te vas a ahorrar tiempo y dinero, no lo pienses más, hazlo ya";
        let (status, body) =
            into_json(handle_evaluate(State(state), evaluate_body(Some(text), Some(""))).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["analisis"]["puntajes"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn evaluate_invalid_url_is_bad_request() {
        let state = state_with(FixedProvider(Some("ok")));
        let (status, body) =
            into_json(handle_evaluate(State(state), evaluate_body(None, Some("ftp://x"))).await)
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("URL inválida"));
    }

    #[tokio::test]
    async fn feedback_success_and_failure() {
        let text = "Compra ya mismo, te vas a ahorrar tiempo y dinero";

        let ok = state_with(FixedProvider(Some("Más calle, menos corbata.")));
        let (status, body) = into_json(
            handle_feedback(State(ok), Ok(Json(FeedbackBody { texto: text.into() }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"], "Más calle, menos corbata.");

        let failing = state_with(FixedProvider(None));
        let (status, body) = into_json(
            handle_feedback(State(failing), Ok(Json(FeedbackBody { texto: text.into() }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("upstream down"));
    }
}
