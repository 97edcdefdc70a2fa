use crate::adapters::eligibility::StaticEligibility;
use crate::core::catalog::RewardCatalog;
use crate::core::{Channel, EligibilityOutcome};
use crate::utils::error::{Result, RewardsError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    pub catalog: CatalogConfig,
    pub eligibility: Option<EligibilityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub default: Option<EligibilityOutcome>,
    #[serde(default)]
    pub accounts: HashMap<String, EligibilityOutcome>,
}

impl RewardsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${REWARD_ID})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RewardsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證頻道名稱與獎勵代碼
    pub fn validate_config(&self) -> Result<()> {
        for channel in &self.catalog.channels {
            validate_non_empty_string("catalog.channels.name", &channel.name)?;
            for reward in &channel.rewards {
                validate_non_empty_string("catalog.channels.rewards", reward)?;
            }
        }

        validate_unique_names(
            "catalog.channels.name",
            self.catalog.channels.iter().map(|c| c.name.as_str()),
        )?;

        if let Some(eligibility) = &self.eligibility {
            for account in eligibility.accounts.keys() {
                validate_non_empty_string("eligibility.accounts", account)?;
            }
        }

        Ok(())
    }

    pub fn catalog(&self) -> RewardCatalog {
        RewardCatalog::new(self.catalog.channels.clone())
    }

    /// 沒有 `[eligibility]` 區段時回傳 None
    pub fn static_eligibility(&self) -> Option<StaticEligibility> {
        self.eligibility.as_ref().map(|config| {
            let default = config
                .default
                .clone()
                .unwrap_or(EligibilityOutcome::Ineligible);
            config
                .accounts
                .iter()
                .fold(StaticEligibility::new(default), |eligibility, (account, outcome)| {
                    eligibility.with_account(account.clone(), outcome.clone())
                })
        })
    }
}

impl Validate for RewardsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
