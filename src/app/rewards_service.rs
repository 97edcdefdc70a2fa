use crate::core::catalog::RewardCatalog;
use crate::core::decision::{decide, validate_request, ValidatedRequest};
use crate::core::{
    AsyncEligibilityService, EligibilityOutcome, EligibilityService, Portfolio, RewardsRequest,
    RewardsResult,
};
use crate::utils::error::{Result, RewardsError};
use futures::FutureExt;
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// 對外的獎勵查詢服務。任何錯誤都不會往外拋，最多回傳空獎勵
#[derive(Debug, Clone, Default)]
pub struct RewardsService {
    catalog: RewardCatalog,
}

impl RewardsService {
    pub fn new(catalog: RewardCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn evaluate(
        &self,
        request: &RewardsRequest<'_>,
        eligibility_service: Option<&dyn EligibilityService>,
    ) -> RewardsResult {
        let decision = self.try_evaluate(request, eligibility_service);
        Self::finish(decision)
    }

    pub async fn evaluate_async(
        &self,
        request: &RewardsRequest<'_>,
        eligibility_service: Option<&dyn AsyncEligibilityService>,
    ) -> RewardsResult {
        let decision = self.try_evaluate_async(request, eligibility_service).await;
        Self::finish(decision)
    }

    /// 接受原始 JSON 請求：`{ "customerAccountNumber": ..., "portfolio": { "subscriptions": [...] } }`
    pub fn evaluate_json(
        &self,
        request: &Value,
        eligibility_service: Option<&dyn EligibilityService>,
    ) -> RewardsResult {
        // 帳號缺漏優先於 portfolio 格式錯誤
        let customer_account_number = match request
            .get("customerAccountNumber")
            .and_then(Value::as_str)
        {
            Some(account) if !account.is_empty() => account,
            _ => return Self::finish(Err(RewardsError::InvalidAccountNumber)),
        };

        let decision = parse_portfolio(request.get("portfolio")).and_then(|portfolio| {
            let validated = ValidatedRequest {
                customer_account_number,
                portfolio: &portfolio,
            };
            self.check_and_decide(&validated, eligibility_service)
        });
        Self::finish(decision)
    }

    fn try_evaluate(
        &self,
        request: &RewardsRequest<'_>,
        eligibility_service: Option<&dyn EligibilityService>,
    ) -> Result<Vec<String>> {
        let validated = validate_request(request)?;
        self.check_and_decide(&validated, eligibility_service)
    }

    fn check_and_decide(
        &self,
        validated: &ValidatedRequest<'_>,
        eligibility_service: Option<&dyn EligibilityService>,
    ) -> Result<Vec<String>> {
        let service = eligibility_service
            .ok_or_else(|| RewardsError::malformed("eligibility service is not invocable"))?;

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            service.check_eligibility(validated.customer_account_number)
        }))
        .map_err(|panic| RewardsError::EligibilityFault {
            message: panic_message(panic.as_ref()),
        })?;

        self.decide_for(validated, &outcome)
    }

    async fn try_evaluate_async(
        &self,
        request: &RewardsRequest<'_>,
        eligibility_service: Option<&dyn AsyncEligibilityService>,
    ) -> Result<Vec<String>> {
        let validated = validate_request(request)?;
        let service = eligibility_service
            .ok_or_else(|| RewardsError::malformed("eligibility service is not invocable"))?;

        let pending =
            AsyncEligibilityService::check_eligibility(service, validated.customer_account_number);
        let outcome = AssertUnwindSafe(pending)
            .catch_unwind()
            .await
            .map_err(|panic| RewardsError::EligibilityFault {
                message: panic_message(panic.as_ref()),
            })?
            .map_err(|e| RewardsError::EligibilityFault {
                message: e.to_string(),
            })?;

        self.decide_for(&validated, &outcome)
    }

    fn decide_for(
        &self,
        validated: &ValidatedRequest<'_>,
        outcome: &EligibilityOutcome,
    ) -> Result<Vec<String>> {
        tracing::debug!("Eligibility outcome received: {:?}", outcome);

        let rewards = decide(&self.catalog, validated.portfolio, outcome)?;
        tracing::debug!(
            "Matched {} rewards for {} subscriptions",
            rewards.len(),
            validated.portfolio.subscriptions.len()
        );
        Ok(rewards)
    }

    fn finish(decision: Result<Vec<String>>) -> RewardsResult {
        match &decision {
            Err(RewardsError::InvalidAccountNumber) => {
                tracing::debug!("Rejected request: invalid account number");
            }
            Err(e) => {
                tracing::warn!("Rewards lookup failed, returning no rewards: {}", e);
            }
            Ok(_) => {}
        }
        RewardsResult::from_decision(decision)
    }
}

/// 非字串的訂閱項目視為不存在的頻道直接略過，但仍計入項目數
fn parse_portfolio(value: Option<&Value>) -> Result<Portfolio> {
    let value = value
        .filter(|value| !value.is_null())
        .ok_or_else(|| RewardsError::malformed("missing portfolio"))?;

    if !value.is_object() {
        return Err(RewardsError::malformed("portfolio is not an object"));
    }

    let entries = value
        .get("subscriptions")
        .and_then(Value::as_array)
        .ok_or_else(|| RewardsError::malformed("portfolio.subscriptions is not an array"))?;

    if entries.is_empty() {
        return Err(RewardsError::malformed("portfolio has no subscriptions"));
    }

    Ok(Portfolio::new(entries.iter().filter_map(Value::as_str)))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "eligibility service panicked".to_string()
    }
}
