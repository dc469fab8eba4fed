//! Lexical heuristics for the six rubric pillars.
//!
//! Every scorer is a pure function of the trimmed text. Containment and counts
//! are plain substring matches (not word matches), so `"ya"` also matches
//! inside `"playa"`. Counts are non-overlapping per marker and summed across
//! markers, so overlapping markers such as `"vas a ganar"` and `"vas a"` both
//! count.

use super::types::{Pillar, PillarResult, Tier};

/// Pre-computed views of one trimmed text shared by all scorers.
pub struct ScoringInput<'a> {
    pub text: &'a str,
    pub lower: String,
    pub words: Vec<&'a str>,
}

impl<'a> ScoringInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            words: text.split_whitespace().collect(),
        }
    }
}

// ── Marker sets ──────────────────────────────────────────────────────────────

const PLAINNESS_MARKERS: [&str; 4] = ["claro", "directo", "al grano", "compra aqui"];

// Matched against the original casing.
const DIRECT_ADDRESS_MARKERS: [&str; 4] = ["tú", "te", "oye", "imagina"];
const PROFANITY_MARKERS: [&str; 3] = ["carajo", "puta", "joder"];

const FORMALITY_MARKERS: [&str; 4] = ["usted", "estimado", "cliente", "consumidor"];

const BENEFIT_MARKERS: [&str; 7] = [
    "vas a ganar",
    "vas a conseguir",
    "beneficio",
    "te vas a ahorrar",
    "para que no",
    "consigue",
    "vas a",
];

const URGENCY_MARKERS: [&str; 8] = [
    "ahora",
    "ya",
    "hoy",
    "última",
    "limitado",
    "no esperes",
    "oferta especial",
    "solo hoy",
];

const CTA_MARKERS: [&str; 8] = [
    "compra",
    "llama",
    "haz clic",
    "escribe ya",
    "apúrate",
    "contacta",
    "no lo pienses",
    "descarga",
];

const ROBOTIC_MARKERS: [&str; 5] = [
    "en conclusión",
    "en resumen",
    "es importante destacar",
    "según estudios",
    "inteligencia artificial",
];

const SLANG_MARKERS: [&str; 7] = [
    "coño",
    "pana",
    "compa",
    "parcero",
    "puta madre",
    "joder",
    "huevón",
];

// ── Helpers ──────────────────────────────────────────────────────────────────

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| haystack.contains(m))
}

fn count_markers(haystack: &str, markers: &[&str]) -> usize {
    markers.iter().map(|m| haystack.matches(m).count()).sum()
}

/// Shared count ladder for benefit, urgency and call to action.
fn score_from_count(count: usize) -> u8 {
    match count {
        0 => 3,
        1 => 5,
        2 => 7,
        _ => 10,
    }
}

// ── Clarity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum WordBound {
    AtMost(usize),
    MoreThan(usize),
}

impl WordBound {
    fn matches(self, words: usize) -> bool {
        match self {
            Self::AtMost(limit) => words <= limit,
            Self::MoreThan(limit) => words > limit,
        }
    }
}

struct ClarityRule {
    words: WordBound,
    needs_plain_marker: bool,
    score: u8,
}

/// First match wins. Texts of 301..=400 words match no rule and fall back to
/// `CLARITY_FALLBACK`, while texts of at most 200 words without a plainness
/// marker land on the 300-word rule.
const CLARITY_RULES: [ClarityRule; 3] = [
    ClarityRule {
        words: WordBound::AtMost(200),
        needs_plain_marker: true,
        score: 9,
    },
    ClarityRule {
        words: WordBound::AtMost(300),
        needs_plain_marker: false,
        score: 7,
    },
    ClarityRule {
        words: WordBound::MoreThan(400),
        needs_plain_marker: false,
        score: 3,
    },
];

const CLARITY_FALLBACK: u8 = 5;

fn clarity(input: &ScoringInput<'_>) -> u8 {
    let word_count = input.words.len();
    let plain = contains_any(&input.lower, &PLAINNESS_MARKERS);

    CLARITY_RULES
        .iter()
        .find(|rule| rule.words.matches(word_count) && (plain || !rule.needs_plain_marker))
        .map_or(CLARITY_FALLBACK, |rule| rule.score)
}

// ── Tone ─────────────────────────────────────────────────────────────────────

/// Base score table, checked in order. Direct address outranks profanity, so
/// profanity only earns its 10 when no direct-address marker is present.
const TONE_BASE_RULES: [(&[&str], u8); 2] = [
    (&DIRECT_ADDRESS_MARKERS, 8),
    (&PROFANITY_MARKERS, 10),
];

const TONE_FALLBACK: u8 = 4;
const FORMALITY_CAP: u8 = 4;

fn tone(input: &ScoringInput<'_>) -> u8 {
    let base = TONE_BASE_RULES
        .iter()
        .find(|(markers, _)| contains_any(input.text, markers))
        .map_or(TONE_FALLBACK, |&(_, score)| score);

    if contains_any(&input.lower, &FORMALITY_MARKERS) {
        base.min(FORMALITY_CAP)
    } else {
        base
    }
}

// ── Count-based pillars ──────────────────────────────────────────────────────

fn benefit(input: &ScoringInput<'_>) -> u8 {
    score_from_count(count_markers(&input.lower, &BENEFIT_MARKERS))
}

fn urgency(input: &ScoringInput<'_>) -> u8 {
    score_from_count(count_markers(&input.lower, &URGENCY_MARKERS))
}

fn call_to_action(input: &ScoringInput<'_>) -> u8 {
    score_from_count(count_markers(&input.lower, &CTA_MARKERS))
}

// ── Authenticity ─────────────────────────────────────────────────────────────

fn authenticity(input: &ScoringInput<'_>) -> u8 {
    if count_markers(&input.lower, &ROBOTIC_MARKERS) > 0 {
        3
    } else if contains_any(&input.lower, &SLANG_MARKERS) {
        10
    } else {
        7
    }
}

// ── Comments ─────────────────────────────────────────────────────────────────

fn comment_for(pillar: Pillar, tier: Tier) -> &'static str {
    match (pillar, tier) {
        (Pillar::Clarity, Tier::Positive) => {
            "✔️ Tu mensaje es claro y directo. ¡Así se conecta de verdad!"
        }
        (Pillar::Clarity, Tier::Mixed) => {
            "🟡 El mensaje es entendible, pero dale más filo y precisión."
        }
        (Pillar::Clarity, Tier::Negative) => {
            "❌ Aquí hay demasiada habladera. Ve al grano sin miedo."
        }
        (Pillar::Tone, Tier::Positive) => {
            "✔️ Hablas como se debe: directo y con emoción auténtica."
        }
        (Pillar::Tone, Tier::Mixed) => {
            "🟡 Tono correcto pero podría ser más cercano o con más garra."
        }
        (Pillar::Tone, Tier::Negative) => "❌ Suena formal o distante. ¡Ponle pasión!",
        (Pillar::Benefit, Tier::Positive) => {
            "✔️ El beneficio está clarísimo y despierta deseo. Excelente."
        }
        (Pillar::Benefit, Tier::Mixed) => {
            "🟡 El beneficio está presente pero puede ser más contundente."
        }
        (Pillar::Benefit, Tier::Negative) => {
            "❌ Aquí no veo claro qué gana el cliente. No vendas cuentos."
        }
        (Pillar::Urgency, Tier::Positive) => "✔️ Urgencia sólida que invita a actuar ya mismo.",
        (Pillar::Urgency, Tier::Mixed) => {
            "🟡 Algo de urgencia, pero podría apretar más el acelerador."
        }
        (Pillar::Urgency, Tier::Negative) => "❌ Sin apuro, sin presión. Así no se vende rápido.",
        (Pillar::CallToAction, Tier::Positive) => {
            "✔️ El llamado a la acción es claro, directo y contundente."
        }
        (Pillar::CallToAction, Tier::Mixed) => {
            "🟡 El CTA está, pero puede ser más tajante o urgente."
        }
        (Pillar::CallToAction, Tier::Negative) => {
            "❌ ¿Dónde está el llamado a la acción? No vendas sin decir cómo."
        }
        (Pillar::Authenticity, Tier::Positive) => {
            "✔️ Hablas con tu voz única, nada robótico ni cliché."
        }
        (Pillar::Authenticity, Tier::Mixed) => {
            "🟡 Tienes buena voz, pero falta ese toque personal más fuerte."
        }
        (Pillar::Authenticity, Tier::Negative) => {
            "❌ Suena a robot o copia barata. Ponte la camiseta."
        }
    }
}

/// Score one pillar and attach the comment for its tier.
pub fn score_pillar(pillar: Pillar, input: &ScoringInput<'_>) -> PillarResult {
    let score = match pillar {
        Pillar::Clarity => clarity(input),
        Pillar::Tone => tone(input),
        Pillar::Benefit => benefit(input),
        Pillar::Urgency => urgency(input),
        Pillar::CallToAction => call_to_action(input),
        Pillar::Authenticity => authenticity(input),
    };

    PillarResult {
        pillar,
        score,
        comment: comment_for(pillar, Tier::from_score(score)).to_string(),
    }
}
