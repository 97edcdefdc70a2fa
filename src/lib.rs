pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::eligibility::StaticEligibility;
pub use app::rewards_service::RewardsService;
pub use config::RewardsConfig;
pub use crate::core::catalog::RewardCatalog;
pub use domain::model::{Channel, EligibilityOutcome, Portfolio, RewardsRequest, RewardsResult};
pub use domain::ports::{AsyncEligibilityService, EligibilityService};
pub use utils::error::{Result, RewardsError};
