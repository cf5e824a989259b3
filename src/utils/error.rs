use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    /// The post-commit reload of authoritative plan state failed. The local
    /// plan store is left at its last known state; nothing optimistic is kept.
    #[error("Plan reload failed after commit: {0}")]
    Reconciliation(#[source] Box<PlannerError>),
}

impl PlannerError {
    pub fn is_reconciliation(&self) -> bool {
        matches!(self, PlannerError::Reconciliation(_))
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
