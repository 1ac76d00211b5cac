use crate::adapters::shopify::DEFAULT_API_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;

pub const ACCESS_TOKEN_VAR: &str = "SHOPIFY_API_KEY";
pub const API_URL_VAR: &str = "SHOPIFY_API_URL";
pub const TIMEOUT_VAR: &str = "SHOPIFY_TIMEOUT_SECONDS";

/// Upstream settings read from the process environment on each invocation.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_url: String,
    pub access_token: String,
    pub timeout_seconds: Option<u64>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup(TIMEOUT_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                CheckError::InvalidConfigValueError {
                    field: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: format!("Not a whole number of seconds: {}", e),
                }
            })?),
            None => None,
        };

        Ok(Self {
            api_url: lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_token: lookup(ACCESS_TOKEN_VAR).ok_or_else(|| CheckError::ConfigError {
                message: format!("{} environment variable is required", ACCESS_TOKEN_VAR),
            })?,
            timeout_seconds,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        super::validate_upstream(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_token_only() {
        let config = LambdaConfig::from_lookup(lookup_from(&[(ACCESS_TOKEN_VAR, "shpat_abc")])).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.access_token, "shpat_abc");
        assert_eq!(config.timeout_seconds, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = LambdaConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, CheckError::ConfigError { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_VAR, "shpat_abc"),
            (API_URL_VAR, "http://localhost:9000/graphql.json"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:9000/graphql.json");
        assert_eq!(config.timeout_seconds, Some(15));
    }

    #[test]
    fn test_bad_timeout() {
        let err = LambdaConfig::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_VAR, "shpat_abc"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CheckError::InvalidConfigValueError { .. }));
    }
}
