use crate::core::{AsyncEligibilityService, EligibilityOutcome, EligibilityService, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// 以固定對照表回答資格查詢，未列出的帳號使用預設結果
#[derive(Debug, Clone)]
pub struct StaticEligibility {
    accounts: HashMap<String, EligibilityOutcome>,
    default: EligibilityOutcome,
}

impl StaticEligibility {
    pub fn new(default: EligibilityOutcome) -> Self {
        Self {
            accounts: HashMap::new(),
            default,
        }
    }

    pub fn with_account(
        mut self,
        customer_account_number: impl Into<String>,
        outcome: EligibilityOutcome,
    ) -> Self {
        self.accounts.insert(customer_account_number.into(), outcome);
        self
    }

    pub fn lookup(&self, customer_account_number: &str) -> EligibilityOutcome {
        self.accounts
            .get(customer_account_number)
            .unwrap_or(&self.default)
            .clone()
    }
}

impl Default for StaticEligibility {
    fn default() -> Self {
        Self::new(EligibilityOutcome::Ineligible)
    }
}

impl EligibilityService for StaticEligibility {
    fn check_eligibility(&self, customer_account_number: &str) -> EligibilityOutcome {
        self.lookup(customer_account_number)
    }
}

#[async_trait]
impl AsyncEligibilityService for StaticEligibility {
    async fn check_eligibility(&self, customer_account_number: &str) -> Result<EligibilityOutcome> {
        Ok(self.lookup(customer_account_number))
    }
}
