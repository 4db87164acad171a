use crate::config::env::{API_BASE_URL_VAR, API_KEY_VAR, FROM_VAR, REQUEST_TIMEOUT_VAR, TO_EMAIL_VAR};
use crate::domain::model::Profile;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub server: Option<ServerSection>,
    pub mail: Option<MailSection>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailSection {
    pub api_key: Option<String>,
    pub to_email: Option<String>,
    pub from: Option<String>,
    pub api_base_url: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

impl SiteConfig {
    /// 從 TOML 檔案載入站台設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::parse(&content, &path.as_ref().display().to_string())
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${RESEND_API_KEY})，未設定者保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn bind(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.bind.as_deref())
    }

    pub fn profile(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }

    /// 以環境變數名稱查詢 [mail] 區塊，供 RelayConfig::from_lookup 補位
    pub fn mail_value(&self, key: &str) -> Option<String> {
        let mail = self.mail.as_ref()?;
        let value = match key {
            API_KEY_VAR => mail.api_key.clone(),
            TO_EMAIL_VAR => mail.to_email.clone(),
            FROM_VAR => mail.from.clone(),
            API_BASE_URL_VAR => mail.api_base_url.clone(),
            REQUEST_TIMEOUT_VAR => mail.request_timeout_seconds.map(|s| s.to_string()),
            _ => None,
        }?;

        // 未被替換的 ${VAR} 視為未設定
        if env_var_pattern().is_match(&value) {
            None
        } else {
            Some(value)
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bind) = self.bind() {
            validate_socket_addr("server.bind", bind)?;
        }

        if let Some(url) = self.mail.as_ref().and_then(|m| m.api_base_url.as_deref()) {
            validate_url("mail.api_base_url", url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_site_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"

[mail]
to_email = "owner@example.com"
from = "Site <site@example.com>"
request_timeout_seconds = 10

[profile]
display_name = "Jane Doe"
email = "jane@example.com"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind(), Some("0.0.0.0:8080"));
        assert_eq!(config.mail_value(TO_EMAIL_VAR).as_deref(), Some("owner@example.com"));
        assert_eq!(config.mail_value(REQUEST_TIMEOUT_VAR).as_deref(), Some("10"));
        assert_eq!(config.mail_value(API_KEY_VAR), None);

        let profile = config.profile();
        assert_eq!(profile.display_name, "Jane Doe");
        // 未列出的欄位沿用預設值
        assert_eq!(profile.resume_path, Profile::default().resume_path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert!(config.bind().is_none());
        assert_eq!(config.profile(), Profile::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_TO_EMAIL", "sub@example.com");

        let toml_content = r#"
[mail]
to_email = "${PORTFOLIO_TEST_TO_EMAIL}"
api_key = "${PORTFOLIO_TEST_UNSET_KEY}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.mail_value(TO_EMAIL_VAR).as_deref(), Some("sub@example.com"));
        assert_eq!(config.mail_value(API_KEY_VAR), None);

        std::env::remove_var("PORTFOLIO_TEST_TO_EMAIL");
    }

    #[test]
    fn test_config_validation() {
        let config = SiteConfig::from_toml_str("[server]\nbind = \"nowhere\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = SiteConfig::from_toml_str("[mail]\napi_base_url = \"ftp://x\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[profile]\ndisplay_name = \"File Owner\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.profile().display_name, "File Owner");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[server\nbind=").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParseError { ref path, .. } if path == "<inline>"));
        assert!(err.is_config_error());
    }
}
