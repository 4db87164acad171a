use thiserror::Error;

/// 對使用者顯示的通用投遞失敗訊息
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Missing {field} environment variable")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error in {path}: {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Email provider rejected the request ({status}): {body}")]
    ProviderRejected { status: u16, body: String },

    #[error("Failed to send email")]
    DeliveryFailed,

    #[error("Unknown form field: {field}")]
    UnknownFieldError { field: String },

    #[error("Failed to bind {addr}: {source}")]
    ServerBindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Delivery,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::ConfigParseError { .. }
            | SiteError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SiteError::ApiError(_) | SiteError::ProviderRejected { .. } | SiteError::DeliveryFailed => {
                ErrorCategory::Delivery
            }
            SiteError::UnknownFieldError { .. } => ErrorCategory::Input,
            SiteError::ServerBindError { .. } | SiteError::IoError(_) | SiteError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Delivery => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// 複製設定類錯誤；其他種類含有不可複製的來源錯誤
    pub fn try_clone_config(&self) -> Option<SiteError> {
        match self {
            SiteError::MissingConfigError { field } => Some(SiteError::MissingConfigError {
                field: field.clone(),
            }),
            SiteError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => Some(SiteError::InvalidConfigValueError {
                field: field.clone(),
                value: value.clone(),
                reason: reason.clone(),
            }),
            SiteError::ConfigParseError { path, message } => Some(SiteError::ConfigParseError {
                path: path.clone(),
                message: message.clone(),
            }),
            SiteError::ConfigValidationError { field, message } => {
                Some(SiteError::ConfigValidationError {
                    field: field.clone(),
                    message: message.clone(),
                })
            }
            _ => None,
        }
    }

    /// 回傳給呼叫端的訊息：設定錯誤保留描述，其餘一律為通用失敗
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::ConfigParseError { .. }
            | SiteError::ConfigValidationError { .. } => self.to_string(),
            SiteError::UnknownFieldError { field } => format!("Unknown form field: {}", field),
            SiteError::ServerBindError { .. } | SiteError::IoError(_) | SiteError::SerializationError(_) => {
                "Internal error while handling the request".to_string()
            }
            _ => DELIVERY_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::MissingConfigError { field } => {
                format!("Set the {} environment variable and restart the server", field)
            }
            SiteError::ConfigParseError { path, .. } => {
                format!("Fix the TOML syntax in {}", path)
            }
            SiteError::InvalidConfigValueError { field, .. }
            | SiteError::ConfigValidationError { field, .. } => {
                format!("Check the value of '{}' in the environment or site config", field)
            }
            SiteError::ApiError(_) => "Check network connectivity to the email provider".to_string(),
            SiteError::ProviderRejected { .. } => {
                "Check the provider API key, sender domain and account quota".to_string()
            }
            SiteError::DeliveryFailed => "Try submitting the form again later".to_string(),
            SiteError::UnknownFieldError { .. } => {
                "Only name, email and message fields are accepted".to_string()
            }
            SiteError::ServerBindError { addr, .. } => {
                format!("Make sure {} is free or pass another --bind address", addr)
            }
            SiteError::IoError(_) => "Check file paths and permissions".to_string(),
            SiteError::SerializationError(_) => "Check the request or response payload".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
