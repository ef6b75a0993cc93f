use thiserror::Error;

/// Unified error type for the entire teleskop-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("No API key configured for {0}")]
    MissingApiKey(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("{0}")]
    ValidationError(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(u64),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl CoreError {
    /// Shorthand for an `Api` error attributed to `provider`.
    pub fn api(provider: &str, message: impl Into<String>) -> Self {
        CoreError::Api {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

/// Strip everything after the first `?` so query parameters (API keys)
/// never end up in an error message or a log line.
pub fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors often contain full URLs; the Alpha Vantage key
        // travels in the query string.
        CoreError::Network(redact_query(&e.to_string()))
    }
}
