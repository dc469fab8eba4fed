use super::assembler::assemble;
use super::gate::check_triggers;
use super::pillars::{ScoringInput, score_pillar};
use super::types::{EvaluationResult, Pillar};

/// Evaluate marketing copy against the six-pillar rubric.
///
/// The text is trimmed, run through the trigger gate and, only if no trigger
/// fired, scored on every pillar. Total over any input: empty or too-short
/// text is reported as a veto, never as an error. Holds no state, so
/// concurrent callers can share it freely.
pub fn evaluate(text: &str) -> EvaluationResult {
    let text = text.trim();

    let triggers = check_triggers(text);
    if triggers.is_vetoed() {
        tracing::debug!(
            triggers = triggers.messages.len(),
            "copy vetoed before scoring"
        );
        return EvaluationResult::Vetoed(triggers);
    }

    let input = ScoringInput::new(text);
    let pillars = Pillar::ALL.map(|pillar| score_pillar(pillar, &input));
    tracing::debug!(words = input.words.len(), "copy scored");

    EvaluationResult::Scored(assemble(pillars))
}
