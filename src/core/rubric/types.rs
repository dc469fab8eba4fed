use serde::{Deserialize, Serialize};
use strum::Display;

// Pillar: rubric dimension (EXACTLY 6, fixed display order)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pillar {
    Clarity,
    Tone,
    Benefit,
    Urgency,
    CallToAction,
    Authenticity,
}

impl Pillar {
    /// Catalogue in display order.
    pub const ALL: [Pillar; 6] = [
        Pillar::Clarity,
        Pillar::Tone,
        Pillar::Benefit,
        Pillar::Urgency,
        Pillar::CallToAction,
        Pillar::Authenticity,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clarity => "Claridad brutal",
            Self::Tone => "Tono directo y emocional",
            Self::Benefit => "Beneficio claro y egoísta",
            Self::Urgency => "Urgencia y empuje",
            Self::CallToAction => "Llamado a la acción picante",
            Self::Authenticity => "Autenticidad (voz propia)",
        }
    }
}

// Tier: comment category selected by score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    Positive,
    Mixed,
    Negative,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            Self::Positive
        } else if score >= 5 {
            Self::Mixed
        } else {
            Self::Negative
        }
    }
}

// Severity: presentation class used by the markup and the PDF table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Good,
    Medium,
    Bad,
}

impl Severity {
    pub fn from_score(score: u8) -> Self {
        match Tier::from_score(score) {
            Tier::Positive => Self::Good,
            Tier::Mixed => Self::Medium,
            Tier::Negative => Self::Bad,
        }
    }
}

/// Score and comment for one pillar of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarResult {
    pub pillar: Pillar,
    pub score: u8,
    pub comment: String,
}

impl PillarResult {
    pub fn pillar_name(&self) -> &'static str {
        self.pillar.display_name()
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score)
    }
}

/// Messages of every trigger that fired, in rule order. Empty means the text passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerOutcome {
    pub messages: Vec<String>,
}

impl TriggerOutcome {
    pub fn is_vetoed(&self) -> bool {
        !self.messages.is_empty()
    }
}

/// Successful scoring: six pillar results plus their display markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub pillars: [PillarResult; 6],
    pub markup: String,
}

impl Analysis {
    pub fn scores(&self) -> [u8; 6] {
        self.pillars.each_ref().map(|result| result.score)
    }

    pub fn comments(&self) -> [&str; 6] {
        self.pillars.each_ref().map(|result| result.comment.as_str())
    }
}

// EvaluationResult: veto and scored outcomes are mutually exclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationResult {
    Vetoed(TriggerOutcome),
    Scored(Analysis),
}

impl EvaluationResult {
    pub fn is_vetoed(&self) -> bool {
        matches!(self, Self::Vetoed(_))
    }

    /// Trigger messages; empty on the scored path.
    pub fn triggers(&self) -> &[String] {
        match self {
            Self::Vetoed(outcome) => &outcome.messages,
            Self::Scored(_) => &[],
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            Self::Vetoed(_) => None,
            Self::Scored(analysis) => Some(analysis),
        }
    }

    /// Pillar scores in display order; all zero when vetoed.
    pub fn scores(&self) -> [u8; 6] {
        self.analysis().map_or([0; 6], Analysis::scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_has_exactly_6_variants_in_display_order() {
        assert_eq!(Pillar::ALL.len(), 6);
        assert_eq!(Pillar::ALL[0], Pillar::Clarity);
        assert_eq!(Pillar::ALL[5], Pillar::Authenticity);
    }

    #[test]
    fn test_pillar_display_snake_case() {
        assert_eq!(Pillar::CallToAction.to_string(), "call_to_action");
        assert_eq!(
            Pillar::CallToAction.display_name(),
            "Llamado a la acción picante"
        );
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(10), Tier::Positive);
        assert_eq!(Tier::from_score(8), Tier::Positive);
        assert_eq!(Tier::from_score(7), Tier::Mixed);
        assert_eq!(Tier::from_score(5), Tier::Mixed);
        assert_eq!(Tier::from_score(4), Tier::Negative);
        assert_eq!(Tier::from_score(0), Tier::Negative);
    }

    #[test]
    fn test_severity_class_names() {
        assert_eq!(Severity::from_score(9).to_string(), "good");
        assert_eq!(Severity::from_score(5).to_string(), "medium");
        assert_eq!(Severity::from_score(3).to_string(), "bad");
    }

    #[test]
    fn test_vetoed_result_has_zero_scores() {
        let result = EvaluationResult::Vetoed(TriggerOutcome {
            messages: vec!["nope".into()],
        });
        assert!(result.is_vetoed());
        assert_eq!(result.scores(), [0; 6]);
        assert_eq!(result.triggers(), ["nope".to_string()]);
        assert!(result.analysis().is_none());
    }

    #[test]
    fn test_evaluation_result_tagged_by_status() {
        let result = EvaluationResult::Vetoed(TriggerOutcome::default());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"vetoed\""));
    }
}
