pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::{toml_config::TomlConfig, NotifyConfig};
pub use core::card::CardDocument;
pub use core::delivery::{deliver, Notifier};
pub use core::render::{render, render_with};
pub use domain::model::{ContentItem, ContentValue, HeaderColor, MessageDescription};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{NotifyError, Result};
