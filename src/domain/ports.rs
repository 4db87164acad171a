use crate::domain::model::{OutboundEmail, SendReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 交易型郵件服務商
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn to_email(&self) -> &str;
    fn from_address(&self) -> &str;
    fn api_base_url(&self) -> &str;
}

/// 主題偏好的保存位置（瀏覽器 cookie、測試用記憶體等）
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}
