pub mod env;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Single-page portfolio site with a contact form mail relay")]
pub struct CliConfig {
    #[arg(long, help = "Address to listen on (default 127.0.0.1:3000)")]
    pub bind: Option<String>,

    #[arg(long, help = "Optional TOML site config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the email provider base URL")]
    pub api_base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列優先，其次站台設定檔，最後預設值
    pub fn resolve_bind<'a>(&'a self, file_bind: Option<&'a str>) -> &'a str {
        self.bind.as_deref().or(file_bind).unwrap_or(DEFAULT_BIND)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bind) = &self.bind {
            validate_socket_addr("bind", bind)?;
        }
        if let Some(url) = &self.api_base_url {
            validate_url("api_base_url", url)?;
        }
        Ok(())
    }
}
