use zentao::core::rubric::EvaluationResult;

/// Plain-text view of an evaluation for the terminal.
pub(crate) fn render_evaluation(result: &EvaluationResult) -> String {
    match result {
        EvaluationResult::Vetoed(outcome) => {
            let mut out = String::from("Disparadores detectados:\n");
            for message in &outcome.messages {
                out.push_str("  - ");
                out.push_str(message);
                out.push('\n');
            }
            out
        }
        EvaluationResult::Scored(analysis) => {
            let width = analysis
                .pillars
                .iter()
                .map(|r| r.pillar_name().chars().count())
                .max()
                .unwrap_or(0);
            let mut out = String::new();
            for result in &analysis.pillars {
                out.push_str(&format!(
                    "{:<width$}  {:>2}/10  {}\n",
                    result.pillar_name(),
                    result.score,
                    result.comment,
                ));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zentao::core::rubric::evaluate;

    #[test]
    fn renders_one_line_per_pillar() {
        let out = render_evaluation(&evaluate(
            "Compra ya mismo, te vas a ahorrar tiempo y dinero, no lo pienses más, hazlo ya",
        ));
        assert_eq!(out.lines().count(), 6);
        assert!(out.starts_with("Claridad brutal"));
        assert!(out.contains("/10"));
    }

    #[test]
    fn renders_veto_messages() {
        let out = render_evaluation(&evaluate("hola"));
        assert!(out.starts_with("Disparadores detectados:"));
        assert!(out.contains("saludando"));
    }
}
