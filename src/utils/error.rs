use thiserror::Error;

/// 回應中回報給呼叫端的帳號錯誤訊息
pub const INVALID_ACCOUNT_MESSAGE: &str = "Invalid account number";

#[derive(Error, Debug)]
pub enum RewardsError {
    #[error("Invalid account number")]
    InvalidAccountNumber,

    #[error("Invalid parameters were provided: {reason}")]
    MalformedRequest { reason: String },

    #[error("Eligibility service fault: {message}")]
    EligibilityFault { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RewardsError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        RewardsError::MalformedRequest {
            reason: reason.into(),
        }
    }

    /// 只有帳號錯誤會回報給呼叫端，其餘一律視為空獎勵
    pub fn is_reported(&self) -> bool {
        matches!(self, RewardsError::InvalidAccountNumber)
    }
}

pub type Result<T> = std::result::Result<T, RewardsError>;
