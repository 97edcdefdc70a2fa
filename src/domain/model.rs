use crate::utils::error::{RewardsError, INVALID_ACCOUNT_MESSAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CUSTOMER_ELIGIBLE: &str = "CUSTOMER_ELIGIBLE";
pub const CUSTOMER_INELIGIBLE: &str = "CUSTOMER_INELIGIBLE";
pub const INVALID_ACCOUNT_SENTINEL: &str = "Invalid account number exception";
pub const TECHNICAL_FAILURE_SENTINEL: &str = "Technical failure exception";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(default)]
    pub rewards: Vec<String>,
}

impl Channel {
    pub fn new<N, R>(name: N, rewards: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            rewards: rewards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub subscriptions: Vec<String>,
}

impl Portfolio {
    pub fn new<I>(subscriptions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            subscriptions: subscriptions.into_iter().map(Into::into).collect(),
        }
    }
}

/// 資格服務回傳的結果。來源是開放字串，無法辨識的值保留在 `Unrecognized`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityOutcome {
    Eligible,
    Ineligible,
    InvalidAccount,
    TechnicalFailure,
    Empty,
    Unrecognized(String),
}

impl EligibilityOutcome {
    pub fn parse(value: &str) -> Self {
        match value {
            CUSTOMER_ELIGIBLE => Self::Eligible,
            CUSTOMER_INELIGIBLE => Self::Ineligible,
            INVALID_ACCOUNT_SENTINEL => Self::InvalidAccount,
            TECHNICAL_FAILURE_SENTINEL => Self::TechnicalFailure,
            "" => Self::Empty,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_sentinel(&self) -> &str {
        match self {
            Self::Eligible => CUSTOMER_ELIGIBLE,
            Self::Ineligible => CUSTOMER_INELIGIBLE,
            Self::InvalidAccount => INVALID_ACCOUNT_SENTINEL,
            Self::TechnicalFailure => TECHNICAL_FAILURE_SENTINEL,
            Self::Empty => "",
            Self::Unrecognized(value) => value,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl From<String> for EligibilityOutcome {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for EligibilityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sentinel())
    }
}

impl Serialize for EligibilityOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_sentinel())
    }
}

impl<'de> Deserialize<'de> for EligibilityOutcome {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RewardsRequest<'a> {
    pub customer_account_number: Option<&'a str>,
    pub portfolio: Option<&'a Portfolio>,
}

impl<'a> RewardsRequest<'a> {
    pub fn new(customer_account_number: &'a str, portfolio: &'a Portfolio) -> Self {
        Self {
            customer_account_number: Some(customer_account_number),
            portfolio: Some(portfolio),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsResult {
    pub rewards: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RewardsResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn granted(rewards: Vec<String>) -> Self {
        Self {
            rewards,
            error: None,
        }
    }

    pub fn invalid_account() -> Self {
        Self {
            rewards: Vec::new(),
            error: Some(INVALID_ACCOUNT_MESSAGE.to_string()),
        }
    }

    /// 把核心的判定結果轉成對外回應
    pub fn from_decision(decision: Result<Vec<String>, RewardsError>) -> Self {
        match decision {
            Ok(rewards) => Self::granted(rewards),
            Err(e) if e.is_reported() => Self::invalid_account(),
            Err(_) => Self::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sentinels() {
        assert_eq!(EligibilityOutcome::parse("CUSTOMER_ELIGIBLE"), EligibilityOutcome::Eligible);
        assert_eq!(
            EligibilityOutcome::parse("CUSTOMER_INELIGIBLE"),
            EligibilityOutcome::Ineligible
        );
        assert_eq!(
            EligibilityOutcome::parse("Invalid account number exception"),
            EligibilityOutcome::InvalidAccount
        );
        assert_eq!(
            EligibilityOutcome::parse("Technical failure exception"),
            EligibilityOutcome::TechnicalFailure
        );
        assert_eq!(EligibilityOutcome::parse(""), EligibilityOutcome::Empty);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            EligibilityOutcome::parse("customer_eligible"),
            EligibilityOutcome::Unrecognized("customer_eligible".to_string())
        );
        assert!(!EligibilityOutcome::parse("customer_eligible").is_eligible());
    }

    #[test]
    fn test_outcome_serde_uses_sentinels() {
        let json = serde_json::to_string(&EligibilityOutcome::InvalidAccount).unwrap();
        assert_eq!(json, "\"Invalid account number exception\"");

        let outcome: EligibilityOutcome = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(outcome, EligibilityOutcome::Unrecognized("SOMETHING_NEW".to_string()));
    }

    #[test]
    fn test_result_serialization_omits_missing_error() {
        let granted = RewardsResult::granted(vec!["CHAMPIONS_LEAGUE_FINAL_TICKET".to_string()]);
        assert_eq!(
            serde_json::to_value(&granted).unwrap(),
            serde_json::json!({ "rewards": ["CHAMPIONS_LEAGUE_FINAL_TICKET"] })
        );

        assert_eq!(
            serde_json::to_value(RewardsResult::invalid_account()).unwrap(),
            serde_json::json!({ "rewards": [], "error": "Invalid account number" })
        );
    }

    #[test]
    fn test_from_decision() {
        assert_eq!(
            RewardsResult::from_decision(Err(RewardsError::InvalidAccountNumber)),
            RewardsResult::invalid_account()
        );
        assert_eq!(
            RewardsResult::from_decision(Err(RewardsError::malformed("no portfolio"))),
            RewardsResult::empty()
        );
        assert_eq!(
            RewardsResult::from_decision(Ok(vec!["A".to_string()])),
            RewardsResult::granted(vec!["A".to_string()])
        );
    }
}
