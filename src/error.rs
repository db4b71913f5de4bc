//! Error taxonomy for the planner.
//!
//! The set is deliberately small. A position commit for a token that no
//! longer exists is not an error at all; it is ignored by the controller.

/// Errors returned by catalog lookups, placement, and configuration.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("unknown token type: {0}")]
    UnknownType(String),
    #[error("unknown background: {0}")]
    UnknownBackground(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PlannerError {
    /// Stable machine-readable code for the error variant.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownType(_) => "E_UNKNOWN_TYPE",
            Self::UnknownBackground(_) => "E_UNKNOWN_BACKGROUND",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::Config(_) => "E_CONFIG_PARSE",
        }
    }
}
