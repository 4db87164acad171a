pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::resend::ResendClient;
pub use app::server::{create_router, serve, AppState};
pub use config::{env::RelayConfig, toml_config::SiteConfig, CliConfig};
pub use crate::core::relay::{ContactRelay, MailRelay, UnconfiguredRelay};
pub use utils::error::{Result, SiteError};
