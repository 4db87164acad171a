use crate::domain::model::{ContactSubmission, OutboundEmail, RelayOutcome};
use crate::domain::ports::{ConfigProvider, EmailProvider};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use maud::html;

/// 聯絡表單送出後呼叫的伺服器端動作
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, submission: &ContactSubmission) -> Result<RelayOutcome>;
}

pub fn subject_for(name: &str) -> String {
    format!("New contact form submission from {}", name)
}

/// 組出寄給站長的信件，純文字內容原樣嵌入，HTML 內容會跳脫
pub fn compose_email<C: ConfigProvider + ?Sized>(config: &C, submission: &ContactSubmission) -> OutboundEmail {
    let ContactSubmission {
        name,
        email,
        message,
    } = submission;

    let text = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
        name, email, message
    );

    let html = html! {
        div {
            h2 { "New Contact Form Submission" }
            p { strong { "Name:" } " " (name) }
            p { strong { "Email:" } " " (email) }
            h3 { "Message:" }
            p {
                @for (i, line) in message.split('\n').enumerate() {
                    @if i > 0 { br; }
                    (line.strip_suffix('\r').unwrap_or(line))
                }
            }
        }
    }
    .into_string();

    OutboundEmail {
        from: config.from_address().to_string(),
        to: vec![config.to_email().to_string()],
        subject: subject_for(name),
        reply_to: email.clone(),
        text,
        html,
    }
}

pub struct MailRelay<P: EmailProvider, C: ConfigProvider> {
    provider: P,
    config: C,
}

impl<P: EmailProvider, C: ConfigProvider> MailRelay<P, C> {
    pub fn new(provider: P, config: C) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 單次投遞，不重試。服務商的錯誤只寫入日誌，呼叫端只會拿到通用失敗
    pub async fn send_contact(&self, submission: &ContactSubmission) -> Result<RelayOutcome> {
        let email = compose_email(&self.config, submission);

        tracing::debug!(
            "Relaying contact message to {} (reply-to: {})",
            self.config.to_email(),
            email.reply_to
        );

        match self.provider.send(&email).await {
            Ok(receipt) => {
                tracing::info!(
                    "📨 Contact message relayed (id: {})",
                    receipt.id.as_deref().unwrap_or("unknown")
                );
                Ok(RelayOutcome { success: true })
            }
            Err(e) => {
                tracing::error!("❌ Error sending email: {}", e);
                Err(SiteError::DeliveryFailed)
            }
        }
    }
}

#[async_trait]
impl<P: EmailProvider, C: ConfigProvider> ContactRelay for MailRelay<P, C> {
    async fn relay(&self, submission: &ContactSubmission) -> Result<RelayOutcome> {
        self.send_contact(submission).await
    }
}

/// 啟動時設定不完整：每次呼叫都以同一個設定錯誤失敗，不做任何網路請求
pub struct UnconfiguredRelay {
    error: SiteError,
}

impl UnconfiguredRelay {
    pub fn new(error: SiteError) -> Self {
        let error = error
            .try_clone_config()
            .unwrap_or_else(|| SiteError::ConfigValidationError {
                field: "mail".to_string(),
                message: error.to_string(),
            });
        Self { error }
    }
}

#[async_trait]
impl ContactRelay for UnconfiguredRelay {
    async fn relay(&self, _submission: &ContactSubmission) -> Result<RelayOutcome> {
        tracing::warn!("⚠️ Contact relay is not configured: {}", self.error);
        Err(self
            .error
            .try_clone_config()
            .unwrap_or(SiteError::DeliveryFailed))
    }
}
