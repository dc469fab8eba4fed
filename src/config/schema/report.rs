use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory for generated PDFs (default: system temp dir)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Analyzed text is cut to this many characters in the report
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

fn default_max_text_chars() -> usize {
    1500
}

impl ReportConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            max_text_chars: default_max_text_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_defaults_to_temp() {
        assert_eq!(ReportConfig::default().output_dir(), std::env::temp_dir());
    }

    #[test]
    fn output_dir_override() {
        let cfg = ReportConfig {
            output_dir: Some(PathBuf::from("/srv/reports")),
            ..ReportConfig::default()
        };
        assert_eq!(cfg.output_dir(), PathBuf::from("/srv/reports"));
    }
}
