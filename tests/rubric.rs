use zentao::core::rubric::{EvaluationResult, Pillar, Severity, Tier, evaluate};

const SCENARIO_C: &str =
    "Compra ya mismo, te vas a ahorrar tiempo y dinero, no lo pienses más, hazlo ya";

fn score_of(result: &EvaluationResult, pillar: Pillar) -> u8 {
    let analysis = result.analysis().expect("text should pass the gate");
    analysis
        .pillars
        .iter()
        .find(|r| r.pillar == pillar)
        .map(|r| r.score)
        .expect("every pillar is scored")
}

#[test]
fn short_texts_never_reach_scoring() {
    for text in ["", "   ", "compra", "compra ya hoy"] {
        let result = evaluate(text);
        assert!(result.is_vetoed(), "{text:?} should be vetoed");
        assert!(result.analysis().is_none());
    }
}

#[test]
fn passing_text_scores_every_pillar_in_order() {
    let result = evaluate(SCENARIO_C);
    let analysis = result.analysis().expect("scenario text passes the gate");

    let order: Vec<Pillar> = analysis.pillars.iter().map(|r| r.pillar).collect();
    assert_eq!(order, Pillar::ALL.to_vec());
    for pillar in &analysis.pillars {
        assert!(pillar.score <= 10);
        let expected = match Tier::from_score(pillar.score) {
            Tier::Positive => Severity::Good,
            Tier::Mixed => Severity::Medium,
            Tier::Negative => Severity::Bad,
        };
        assert_eq!(pillar.severity(), expected);
        assert!(analysis.markup.contains(pillar.pillar_name()));
    }
}

#[test]
fn scenario_c_counts_urgency_and_cta() {
    let result = evaluate(SCENARIO_C);
    assert_eq!(score_of(&result, Pillar::Urgency), 7);
    assert_eq!(score_of(&result, Pillar::CallToAction), 7);
}

#[test]
fn scenario_d_robotic_phrase_wins_over_slang() {
    let result = evaluate("En conclusión, este producto es la vaina, pana, cómpralo ya");
    assert_eq!(score_of(&result, Pillar::Authenticity), 3);
}

#[test]
fn scenario_e_formality_caps_tone() {
    let result = evaluate("Usted merece algo mejor, carajo, deje de perder dinero hoy");
    assert!(score_of(&result, Pillar::Tone) <= 4);
}

#[test]
fn evaluation_is_deterministic_and_serializable() {
    let first = evaluate(SCENARIO_C);
    let second = evaluate(SCENARIO_C);
    assert_eq!(first, second);

    let json = serde_json::to_value(&first).unwrap();
    assert_eq!(json["status"], "scored");
    let back: EvaluationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, first);
}
