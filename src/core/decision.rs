//! 獎勵判定的純函式核心，不做 I/O 也不記錄日誌。

use crate::core::catalog::RewardCatalog;
use crate::domain::model::{Channel, EligibilityOutcome, Portfolio, RewardsRequest};
use crate::utils::error::{Result, RewardsError};
use crate::utils::validation::validate_required_field;

/// 驗證通過、可以送去資格服務的請求
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRequest<'a> {
    pub customer_account_number: &'a str,
    pub portfolio: &'a Portfolio,
}

/// 檢查帳號與訂閱組合。帳號缺漏優先於其他參數錯誤
pub fn validate_request<'a>(request: &RewardsRequest<'a>) -> Result<ValidatedRequest<'a>> {
    let customer_account_number = match request.customer_account_number {
        Some(account) if !account.is_empty() => account,
        _ => return Err(RewardsError::InvalidAccountNumber),
    };

    let portfolio = *validate_required_field("portfolio", &request.portfolio)?;
    if portfolio.subscriptions.is_empty() {
        return Err(RewardsError::malformed("portfolio has no subscriptions"));
    }

    Ok(ValidatedRequest {
        customer_account_number,
        portfolio,
    })
}

/// 依資格結果決定獎勵
pub fn decide(
    catalog: &RewardCatalog,
    portfolio: &Portfolio,
    outcome: &EligibilityOutcome,
) -> Result<Vec<String>> {
    if outcome.is_eligible() {
        return Ok(collect_rewards(catalog, portfolio));
    }

    // 無法辨識的回應與不符資格同樣處理
    match outcome {
        EligibilityOutcome::InvalidAccount => Err(RewardsError::InvalidAccountNumber),
        _ => Ok(Vec::new()),
    }
}

/// 依訂閱順序找出符合的頻道，未知名稱直接略過
pub fn matching_channels<'c>(catalog: &'c RewardCatalog, portfolio: &Portfolio) -> Vec<&'c Channel> {
    portfolio
        .subscriptions
        .iter()
        .filter_map(|subscription| catalog.find(subscription))
        .collect()
}

/// 攤平各頻道的獎勵，不去除重複
pub fn collect_rewards(catalog: &RewardCatalog, portfolio: &Portfolio) -> Vec<String> {
    matching_channels(catalog, portfolio)
        .into_iter()
        .flat_map(|channel| channel.rewards.iter().cloned())
        .collect()
}
