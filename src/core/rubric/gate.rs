use super::types::TriggerOutcome;

/// One disqualifying condition checked before any pillar is scored.
pub struct TriggerRule {
    pub name: &'static str,
    pub fires: fn(&str) -> bool,
    pub message: &'static str,
}

const PERMISSION_PHRASES: [&str; 3] = ["quisiera", "me gustaría", "podrías"];

const CONSULTING_PHRASES: [&str; 5] = [
    "soluciones",
    "brindamos",
    "experiencia única",
    "fomentamos",
    "apoyamos",
];

fn starts_with_greeting(text: &str) -> bool {
    text.to_lowercase().starts_with("hola")
}

fn too_few_words(text: &str) -> bool {
    text.split_whitespace().count() <= 3
}

fn is_empty(text: &str) -> bool {
    text.is_empty()
}

fn asks_permission(text: &str) -> bool {
    let lower = text.to_lowercase();
    PERMISSION_PHRASES.iter().any(|p| lower.contains(p))
}

fn sounds_like_consultancy(text: &str) -> bool {
    let lower = text.to_lowercase();
    CONSULTING_PHRASES.iter().any(|p| lower.contains(p))
}

/// Evaluated top to bottom; every rule runs, so an empty text fires both
/// `too_few_words` and `empty`.
pub const TRIGGER_RULES: [TriggerRule; 5] = [
    TriggerRule {
        name: "greeting",
        fires: starts_with_greeting,
        message: "¿Estás vendiendo o saludando? Esto no es WhatsApp.",
    },
    TriggerRule {
        name: "too_few_words",
        fires: too_few_words,
        message: "¿Y esto qué coño es? Dale forma o bórralo.",
    },
    TriggerRule {
        name: "empty",
        fires: is_empty,
        message: "¿Vas a vender con poder mental o qué?",
    },
    TriggerRule {
        name: "asks_permission",
        fires: asks_permission,
        message: "¡No vengas a pedir permiso! Esto es venta, no una carta de amor.",
    },
    TriggerRule {
        name: "consulting_speak",
        fires: sounds_like_consultancy,
        message: "Parece sacado de una consultora que no vende nada. ¿Quién va a leer esto?",
    },
];

/// Run every trigger rule against already-trimmed text.
pub fn check_triggers(text: &str) -> TriggerOutcome {
    let messages = TRIGGER_RULES
        .iter()
        .filter(|rule| (rule.fires)(text))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "trigger fired");
            rule.message.to_string()
        })
        .collect();

    TriggerOutcome { messages }
}
