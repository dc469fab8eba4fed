use crate::core::rubric::{Analysis, EvaluationResult};
use serde::Serialize;

/// `POST /evaluar` response body.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EvaluateResponse<'a> {
    Disparadores { disparadores: &'a [String] },
    Success { analisis: WireAnalysis<'a> },
}

/// Parallel arrays in pillar display order, plus the rendered markup.
#[derive(Debug, Serialize)]
pub struct WireAnalysis<'a> {
    pub pilares: [&'static str; 6],
    pub puntajes: [u8; 6],
    pub comentarios: [&'a str; 6],
    pub html: &'a str,
}

impl<'a> From<&'a Analysis> for WireAnalysis<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            pilares: analysis.pillars.each_ref().map(|result| result.pillar_name()),
            puntajes: analysis.scores(),
            comentarios: analysis.comments(),
            html: &analysis.markup,
        }
    }
}

impl<'a> From<&'a EvaluationResult> for EvaluateResponse<'a> {
    fn from(result: &'a EvaluationResult) -> Self {
        match result {
            EvaluationResult::Vetoed(outcome) => Self::Disparadores {
                disparadores: &outcome.messages,
            },
            EvaluationResult::Scored(analysis) => Self::Success {
                analisis: WireAnalysis::from(analysis),
            },
        }
    }
}
