use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `zentao`.
///
/// The rubric engine itself never fails; every variant here belongs to one of
/// the I/O collaborators around it. Library callers can match on these to pick
/// a response; application code keeps using `anyhow::Result` for context
/// chains.
#[derive(Debug, Error)]
pub enum ZentaoError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Text source ─────────────────────────────────────────────────────
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    // ── Deep feedback ───────────────────────────────────────────────────
    #[error("feedback: {0}")]
    Feedback(#[from] FeedbackError),

    // ── Report rendering ────────────────────────────────────────────────
    #[error("render: {0}")]
    Render(#[from] RenderError),

    // ── Request validation ──────────────────────────────────────────────
    #[error("request: {0}")]
    Request(#[from] RequestError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Text source errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("URL inválida: {0}")]
    InvalidUrl(String),

    #[error("Error al obtener la página (código {status})")]
    Status { status: u16 },

    #[error("La página no contiene texto visible para análisis")]
    NoVisibleText,

    #[error("Error al extraer texto: {0}")]
    Transport(String),
}

// ─── Deep feedback errors ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("{provider} API key not set")]
    MissingApiKey { provider: String },

    #[error("Error en el análisis profundo ({provider}): {message}")]
    Request { provider: String, message: String },

    #[error("{provider} returned an empty critique")]
    EmptyResponse { provider: String },
}

// ─── Report rendering errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf: {0}")]
    Pdf(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Request validation errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Por favor, escribe un texto para evaluar")]
    EmptyInput,

    #[error("provide exactly one input source (text, --url or --file)")]
    AmbiguousInput,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ZentaoError>;
