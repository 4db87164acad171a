use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, validate_url, Validate};
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "RESEND_API_KEY";
pub const TO_EMAIL_VAR: &str = "TO_EMAIL";
pub const FROM_VAR: &str = "CONTACT_FROM";
pub const API_BASE_URL_VAR: &str = "RESEND_API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "RESEND_TIMEOUT_SECONDS";

pub const DEFAULT_FROM: &str = "Portfolio Contact Form <onboarding@resend.dev>";
pub const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// 郵件轉送所需的設定，啟動時建立一次後交給 relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub to_email: String,
    pub from_address: String,
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 從任意來源讀取設定；API key 先檢查，與原本的檢查順序一致
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR);
        let api_key = validate_required_field(API_KEY_VAR, &api_key)?.to_string();

        let to_email = lookup(TO_EMAIL_VAR);
        let to_email = validate_required_field(TO_EMAIL_VAR, &to_email)?.to_string();

        let from_address = lookup(FROM_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FROM.to_string());

        let api_base_url = lookup(API_BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|e| SiteError::InvalidConfigValueError {
                    field: REQUEST_TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: format!("Timeout must be a whole number of seconds: {}", e),
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_key,
            to_email,
            from_address,
            api_base_url,
            request_timeout,
        })
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

impl ConfigProvider for RelayConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn to_email(&self) -> &str {
        &self.to_email
    }

    fn from_address(&self) -> &str {
        &self.from_address
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_url(API_BASE_URL_VAR, &self.api_base_url)?;
        validate_non_empty_string(FROM_VAR, &self.from_address)?;

        tracing::debug!("✅ Relay configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_complete_config_uses_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "re_test"),
            (TO_EMAIL_VAR, "owner@example.com"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), "re_test");
        assert_eq!(config.to_email(), "owner@example.com");
        assert_eq!(config.from_address(), DEFAULT_FROM);
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert!(config.request_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_reported_first() {
        let err = RelayConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Missing RESEND_API_KEY environment variable");
    }

    #[test]
    fn test_missing_destination_address() {
        let err = RelayConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "re_test")])).unwrap_err();
        assert!(matches!(err, SiteError::MissingConfigError { ref field } if field == TO_EMAIL_VAR));
        assert_eq!(err.to_string(), "Missing TO_EMAIL environment variable");
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "re_test"),
            (TO_EMAIL_VAR, ""),
        ]))
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_optional_overrides() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "re_test"),
            (TO_EMAIL_VAR, "owner@example.com"),
            (FROM_VAR, "Site <site@example.com>"),
            (API_BASE_URL_VAR, "http://localhost:9999"),
            (REQUEST_TIMEOUT_VAR, "15"),
        ]))
        .unwrap();

        assert_eq!(config.from_address(), "Site <site@example.com>");
        assert_eq!(config.api_base_url(), "http://localhost:9999");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_unparsable_timeout_is_rejected() {
        let err = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "re_test"),
            (TO_EMAIL_VAR, "owner@example.com"),
            (REQUEST_TIMEOUT_VAR, "abc"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            SiteError::InvalidConfigValueError { ref field, ref value, .. }
                if field == REQUEST_TIMEOUT_VAR && value == "abc"
        ));
    }

    #[test]
    fn test_whitespace_only_key_counts_as_present() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, " "),
            (TO_EMAIL_VAR, "owner@example.com"),
        ]))
        .unwrap();
        assert_eq!(config.api_key(), " ");
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "re_test"),
            (TO_EMAIL_VAR, "owner@example.com"),
        ]))
        .unwrap()
        .with_api_base_url("not a url");

        assert!(config.validate().is_err());
    }
}
