use crate::adapters::shopify::DEFAULT_API_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pincode-check")]
#[command(about = "Check product stock near a pincode")]
pub struct CliConfig {
    #[arg(long)]
    pub pincode: String,

    #[arg(long)]
    pub product_id: String,

    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, env = "SHOPIFY_API_KEY", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long, help = "Load upstream settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_upstream(self)
    }
}
