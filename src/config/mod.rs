#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_secret, validate_url};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// 三種設定來源共用的檢查
pub(crate) fn validate_upstream(config: &impl ConfigProvider) -> Result<()> {
    validate_url("api_url", config.api_url())?;
    validate_secret("access_token", config.access_token())?;
    if let Some(timeout) = config.timeout_seconds() {
        validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
    }
    Ok(())
}
