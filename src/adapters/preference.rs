use crate::domain::ports::PreferenceStore;
use axum::http::{header, HeaderMap};

pub const THEME_COOKIE: &str = "theme";
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// 以瀏覽器 cookie 保存主題偏好；寫入後由回應帶回 Set-Cookie
#[derive(Debug, Clone, Default)]
pub struct CookiePreferenceStore {
    current: Option<String>,
    pending: Option<String>,
}

impl CookiePreferenceStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let current = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .map(|(_, value)| value.trim().to_string());

        Self {
            current,
            pending: None,
        }
    }

    /// 有變更時才需要送出 Set-Cookie
    pub fn set_cookie_header(&self) -> Option<String> {
        self.pending.as_ref().map(|value| {
            format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                THEME_COOKIE, value, COOKIE_MAX_AGE_SECS
            )
        })
    }
}

impl PreferenceStore for CookiePreferenceStore {
    fn load(&self) -> Option<String> {
        self.pending.clone().or_else(|| self.current.clone())
    }

    fn save(&mut self, value: &str) {
        self.pending = Some(value.to_string());
    }
}
