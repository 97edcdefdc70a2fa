pub mod catalog;
pub mod decision;

pub use crate::domain::model::{Channel, EligibilityOutcome, Portfolio, RewardsRequest, RewardsResult};
pub use crate::domain::ports::{AsyncEligibilityService, EligibilityService};
pub use crate::utils::error::Result;
