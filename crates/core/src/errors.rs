use thiserror::Error;

/// Unified error type for the entire cashflow-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Ingestion ───────────────────────────────────────────────────
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("No rows with a valid date survived normalization")]
    EmptyDataset,

    // ── Filtering ───────────────────────────────────────────────────
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("No entries fall within the requested date range")]
    EmptyRange,

    // ── Advice / Network ────────────────────────────────────────────
    #[error("Advice service returned no content")]
    AdviceUnavailable,

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::MalformedInput(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedInput(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
