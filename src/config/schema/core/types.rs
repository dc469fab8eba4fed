use super::super::{FeedbackConfig, GatewayConfig, LinkConfig, ReportConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "deepseek-chat";

fn default_temperature() -> f64 {
    0.7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    pub default_model: Option<String>,
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub links: LinkConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Model used for deep feedback.
    pub fn model(&self) -> &str {
        self.default_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::Validation(format!(
                "default_temperature must be within 0.0..=2.0 (got {})",
                self.default_temperature
            )));
        }
        if self.feedback.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "feedback.max_tokens must be greater than zero".into(),
            ));
        }
        if self.report.max_text_chars == 0 {
            return Err(ConfigError::Validation(
                "report.max_text_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".zentao").join("config.toml"),
            api_key: None,
            default_model: Some(DEFAULT_MODEL.to_string()),
            default_temperature: default_temperature(),
            feedback: FeedbackConfig::default(),
            links: LinkConfig::default(),
            gateway: GatewayConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
