//! Long-form critique of evaluated copy from an LLM.
//!
//! The caller evaluates the text first and hands the outcome over as a
//! [`FeedbackContext`]; nothing is remembered between calls.

pub mod prompt;

use crate::config::Config;
use crate::core::rubric::EvaluationResult;
use crate::error::FeedbackError;
use crate::providers::{OpenAiCompatibleProvider, Provider};
use std::sync::Arc;

/// Text plus the analysis summary the critique should build on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackContext {
    pub text: String,
    pub summary: String,
}

impl FeedbackContext {
    /// Summary is the rendered markup when scored, the trigger list when vetoed.
    pub fn from_evaluation(text: &str, result: &EvaluationResult) -> Self {
        let summary = match result {
            EvaluationResult::Scored(analysis) => analysis.markup.clone(),
            EvaluationResult::Vetoed(outcome) => {
                let mut summary = String::from("Disparadores detectados:");
                for message in &outcome.messages {
                    summary.push_str("\n- ");
                    summary.push_str(message);
                }
                summary
            }
        };
        Self {
            text: text.trim().to_string(),
            summary,
        }
    }
}

pub struct DeepFeedback {
    provider: Arc<dyn Provider>,
    provider_name: String,
    model: String,
    temperature: f64,
    has_credentials: bool,
}

impl DeepFeedback {
    pub fn new(
        provider: Arc<dyn Provider>,
        provider_name: &str,
        model: &str,
        temperature: f64,
    ) -> Self {
        Self {
            provider,
            provider_name: provider_name.to_string(),
            model: model.to_string(),
            temperature,
            has_credentials: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let feedback = &config.feedback;
        let provider = OpenAiCompatibleProvider::new(
            &feedback.provider,
            &feedback.base_url,
            config.api_key.as_deref(),
            feedback.max_tokens,
            feedback.timeout_secs,
        );
        let has_credentials = provider.has_api_key();
        Self {
            provider: Arc::new(provider),
            provider_name: feedback.provider.clone(),
            model: config.model().to_string(),
            temperature: config.default_temperature,
            has_credentials,
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Ask the model for the four-part critique of `ctx`.
    pub async fn critique(&self, ctx: &FeedbackContext) -> Result<String, FeedbackError> {
        if !self.has_credentials {
            return Err(FeedbackError::MissingApiKey {
                provider: self.provider_name.clone(),
            });
        }

        let user_prompt = prompt::build_user_prompt(ctx);
        tracing::debug!(
            provider = %self.provider_name,
            model = %self.model,
            prompt_chars = user_prompt.chars().count(),
            "requesting deep feedback"
        );

        let reply = self
            .provider
            .chat_with_system(
                Some(prompt::SYSTEM_PROMPT),
                &user_prompt,
                &self.model,
                self.temperature,
            )
            .await
            .map_err(|e| {
                let message = crate::providers::sanitize_api_error(&format!("{e:#}"));
                tracing::warn!(provider = %self.provider_name, error = %message, "deep feedback failed");
                FeedbackError::Request {
                    provider: self.provider_name.clone(),
                    message,
                }
            })?;

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(FeedbackError::EmptyResponse {
                provider: self.provider_name.clone(),
            });
        }
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rubric::evaluate;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedProvider {
        reply: anyhow::Result<String>,
        prompts: Mutex<Vec<(Option<String>, String, f64)>>,
    }

    impl CannedProvider {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(anyhow::anyhow!(message.to_string())),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Provider for CannedProvider {
        async fn chat_with_system(
            &self,
            system_prompt: Option<&str>,
            message: &str,
            _model: &str,
            temperature: f64,
        ) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push((
                system_prompt.map(str::to_string),
                message.to_string(),
                temperature,
            ));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(anyhow::anyhow!(e.to_string())),
            }
        }
    }

    fn scored_context() -> FeedbackContext {
        let text = "Compra ya mismo, te vas a ahorrar tiempo y dinero, no lo pienses más, hazlo ya";
        FeedbackContext::from_evaluation(text, &evaluate(text))
    }

    #[test]
    fn context_from_scored_evaluation_uses_markup() {
        let ctx = scored_context();
        assert!(ctx.summary.starts_with("<div"));
        assert!(ctx.summary.contains("Claridad brutal"));
    }

    #[test]
    fn context_from_veto_lists_triggers() {
        let ctx = FeedbackContext::from_evaluation("  hola  ", &evaluate("hola"));
        assert_eq!(ctx.text, "hola");
        assert!(ctx.summary.starts_with("Disparadores detectados:\n- "));
    }

    #[tokio::test]
    async fn critique_sends_prompts_and_trims_reply() {
        let provider = CannedProvider::ok("\n  Tu copy necesita más calle.  \n");
        let feedback = DeepFeedback::new(provider.clone(), "deepseek", "deepseek-chat", 0.7);

        let reply = feedback.critique(&scored_context()).await.unwrap();
        assert_eq!(reply, "Tu copy necesita más calle.");

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let (system, user, temperature) = &prompts[0];
        assert_eq!(system.as_deref(), Some(prompt::SYSTEM_PROMPT));
        assert!(user.contains("Compra ya mismo"));
        assert!((temperature - 0.7).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn critique_maps_provider_failure() {
        let feedback = DeepFeedback::new(
            CannedProvider::failing("deepseek API error (500): boom"),
            "deepseek",
            "deepseek-chat",
            0.7,
        );
        let err = feedback.critique(&scored_context()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Request { .. }));
        assert!(err.to_string().starts_with("Error en el análisis profundo (deepseek)"));
    }

    #[tokio::test]
    async fn critique_rejects_blank_reply() {
        let feedback = DeepFeedback::new(CannedProvider::ok("   "), "deepseek", "deepseek-chat", 0.7);
        let err = feedback.critique(&scored_context()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyResponse { .. }));
    }

    #[tokio::test]
    async fn critique_without_key_fails_before_request() {
        let config = Config::default();
        let feedback = DeepFeedback::from_config(&config);
        let err = feedback.critique(&scored_context()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::MissingApiKey { .. }));
    }
}
