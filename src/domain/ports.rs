use crate::domain::model::EligibilityOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部注入的資格判定服務，每次請求只會呼叫一次
pub trait EligibilityService: Send + Sync {
    fn check_eligibility(&self, customer_account_number: &str) -> EligibilityOutcome;
}

impl<F> EligibilityService for F
where
    F: Fn(&str) -> EligibilityOutcome + Send + Sync,
{
    fn check_eligibility(&self, customer_account_number: &str) -> EligibilityOutcome {
        self(customer_account_number)
    }
}

#[async_trait]
pub trait AsyncEligibilityService: Send + Sync {
    async fn check_eligibility(&self, customer_account_number: &str) -> Result<EligibilityOutcome>;
}
