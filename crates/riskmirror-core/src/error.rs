use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskMirrorError {
    #[error("Unknown analysis domain: {0}")]
    UnknownDomain(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RiskMirrorError {
    fn from(err: serde_json::Error) -> Self {
        RiskMirrorError::Serialization(err.to_string())
    }
}
