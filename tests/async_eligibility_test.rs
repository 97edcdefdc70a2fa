use async_trait::async_trait;
use rewards_service::{
    AsyncEligibilityService, EligibilityOutcome, Portfolio, RewardsRequest, RewardsResult,
    RewardsService, StaticEligibility,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const CUSTOMER_ACCOUNT_NUMBER: &str = "1111-4444-4455-5555";

struct SlowEligibility {
    outcome: EligibilityOutcome,
    calls: AtomicUsize,
}

#[async_trait]
impl AsyncEligibilityService for SlowEligibility {
    async fn check_eligibility(
        &self,
        _customer_account_number: &str,
    ) -> rewards_service::Result<EligibilityOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(self.outcome.clone())
    }
}

struct FailingEligibility;

#[async_trait]
impl AsyncEligibilityService for FailingEligibility {
    async fn check_eligibility(
        &self,
        _customer_account_number: &str,
    ) -> rewards_service::Result<EligibilityOutcome> {
        Err(anyhow::anyhow!("connection reset by peer").into())
    }
}

struct PanickingEligibility;

#[async_trait]
impl AsyncEligibilityService for PanickingEligibility {
    async fn check_eligibility(
        &self,
        _customer_account_number: &str,
    ) -> rewards_service::Result<EligibilityOutcome> {
        panic!("backend exploded")
    }
}

#[tokio::test]
async fn test_async_eligible_awaits_single_call() {
    let service = RewardsService::default();
    let portfolio = Portfolio::new(["SPORTS"]);
    let eligibility = SlowEligibility {
        outcome: EligibilityOutcome::Eligible,
        calls: AtomicUsize::new(0),
    };

    let result = service
        .evaluate_async(
            &RewardsRequest::new(CUSTOMER_ACCOUNT_NUMBER, &portfolio),
            Some(&eligibility),
        )
        .await;

    assert_eq!(result.rewards, vec!["CHAMPIONS_LEAGUE_FINAL_TICKET"]);
    assert_eq!(eligibility.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_async_failure_fails_closed() {
    let service = RewardsService::default();
    let portfolio = Portfolio::new(["SPORTS"]);

    let result = service
        .evaluate_async(
            &RewardsRequest::new(CUSTOMER_ACCOUNT_NUMBER, &portfolio),
            Some(&FailingEligibility),
        )
        .await;

    assert_eq!(result, RewardsResult::empty());
}

#[tokio::test]
async fn test_async_panic_fails_closed() {
    let service = RewardsService::default();
    let portfolio = Portfolio::new(["SPORTS"]);

    let result = service
        .evaluate_async(
            &RewardsRequest::new(CUSTOMER_ACCOUNT_NUMBER, &portfolio),
            Some(&PanickingEligibility),
        )
        .await;

    assert_eq!(result, RewardsResult::empty());
}

#[tokio::test]
async fn test_async_invalid_account_reported() {
    let service = RewardsService::default();
    let portfolio = Portfolio::new(["MUSIC"]);
    let eligibility = StaticEligibility::default()
        .with_account(CUSTOMER_ACCOUNT_NUMBER, EligibilityOutcome::InvalidAccount);

    let result = service
        .evaluate_async(
            &RewardsRequest::new(CUSTOMER_ACCOUNT_NUMBER, &portfolio),
            Some(&eligibility),
        )
        .await;

    assert_eq!(result, RewardsResult::invalid_account());
}

#[tokio::test]
async fn test_async_missing_inputs() {
    let service = RewardsService::default();
    let portfolio = Portfolio::new(["SPORTS"]);
    let eligibility = SlowEligibility {
        outcome: EligibilityOutcome::Eligible,
        calls: AtomicUsize::new(0),
    };

    let no_account = RewardsRequest {
        customer_account_number: None,
        portfolio: Some(&portfolio),
    };
    assert_eq!(
        service.evaluate_async(&no_account, Some(&eligibility)).await,
        RewardsResult::invalid_account()
    );

    let no_service = RewardsRequest::new(CUSTOMER_ACCOUNT_NUMBER, &portfolio);
    assert_eq!(
        service.evaluate_async(&no_service, None).await,
        RewardsResult::empty()
    );

    assert_eq!(eligibility.calls.load(Ordering::SeqCst), 0);
}
