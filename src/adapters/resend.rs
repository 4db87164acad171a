use crate::config::env::RelayConfig;
use crate::domain::model::{OutboundEmail, SendReceipt};
use crate::domain::ports::{ConfigProvider, EmailProvider};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;

/// Resend 相容的 HTTP 寄信介面：POST {base}/emails
pub struct ResendClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ResendClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            api_key: config.api_key().to_string(),
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        }
    }

    /// 預設不設逾時；只有設定了 request_timeout 才套用
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    pub fn emails_endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt> {
        let endpoint = self.emails_endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SiteError::ProviderRejected {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: SendReceipt = response.json().await?;
        Ok(receipt)
    }
}
