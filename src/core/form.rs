use crate::core::relay::ContactRelay;
use crate::domain::model::{ContactSubmission, RelayOutcome};
use crate::utils::error::{Result, SiteError};
use std::str::FromStr;

pub const NOTIFICATION_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FromStr for FormField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(SiteError::UnknownFieldError {
                field: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Loading {
        message: String,
    },
    Success {
        title: String,
        description: String,
        duration_ms: u64,
    },
    Error {
        title: String,
        description: String,
        duration_ms: u64,
    },
}

impl Notification {
    pub fn loading() -> Self {
        Notification::Loading {
            message: "Sending your message...".to_string(),
        }
    }

    pub fn sent() -> Self {
        Notification::Success {
            title: "Message sent successfully!".to_string(),
            description: "Thank you for reaching out! I'll get back to you soon.".to_string(),
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn failed() -> Self {
        Notification::Error {
            title: "Failed to send message".to_string(),
            description: "Sorry, there was an error sending your message. Please try again."
                .to_string(),
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }
}

/// 聯絡表單的暫態狀態：Idle → Submitting → (成功 | 失敗) → Idle
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactSubmission) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match name.parse::<FormField>()? {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Message => self.fields.message = value,
        }
        Ok(())
    }

    /// 送出中再次送出會被拒絕（僅是 UI 層的防護）
    pub fn begin_submit(&mut self) -> Option<(ContactSubmission, Notification)> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some((self.fields.clone(), Notification::loading()))
    }

    /// 成功才清空欄位；失敗保留內容讓使用者重試
    pub fn complete(&mut self, result: &Result<RelayOutcome>) -> Notification {
        self.status = SubmissionStatus::Idle;
        match result {
            Ok(_) => {
                self.fields = ContactSubmission::default();
                Notification::sent()
            }
            Err(_) => Notification::failed(),
        }
    }

    pub async fn submit<R: ContactRelay + ?Sized>(&mut self, relay: &R) -> Option<Notification> {
        let (snapshot, loading) = self.begin_submit()?;
        tracing::debug!("{:?}", loading);

        let result = relay.relay(&snapshot).await;
        if let Err(e) = &result {
            tracing::debug!("Contact submission failed: {}", e);
        }
        Some(self.complete(&result))
    }
}
