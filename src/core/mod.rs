pub mod form;
pub mod relay;
pub mod theme;

pub use crate::domain::model::{ContactSubmission, OutboundEmail, RelayOutcome, SendReceipt};
pub use crate::domain::ports::{ConfigProvider, EmailProvider, PreferenceStore};
pub use crate::utils::error::Result;
