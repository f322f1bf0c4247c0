#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::ContentItem;
use crate::domain::model::MessageDescription;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

/// 未指定 webhook 時讀取的環境變數
pub const WEBHOOK_ENV: &str = "FEISHU_WEBHOOK";

/// 合併 TOML、命令列與環境變數後的最終設定
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
    pub message: MessageDescription,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl NotifyConfig {
    pub fn from_toml(file: TomlConfig) -> Self {
        Self {
            webhook_url: file.webhook.url.clone().filter(|url| !url.is_empty()),
            timeout_seconds: file.timeout_seconds(),
            log_level: file.log_level().map(str::to_string),
            json_logs: file.json_logs(),
            message: file.message,
            dry_run: false,
            verbose: false,
        }
    }

    /// 依序套用：TOML 檔 -> 命令列參數 -> `FEISHU_WEBHOOK`
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        Self::from_cli_with_env(cli, std::env::var(WEBHOOK_ENV).ok())
    }

    #[cfg(feature = "cli")]
    pub fn from_cli_with_env(cli: &cli::CliConfig, env_webhook: Option<String>) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading message file: {}", path);
                Self::from_toml(TomlConfig::from_file(path)?)
            }
            None => Self {
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
                ..Default::default()
            },
        };

        if let Some(webhook) = &cli.webhook {
            config.webhook_url = Some(webhook.clone());
        }
        if config.webhook_url.is_none() {
            config.webhook_url = env_webhook.filter(|url| !url.is_empty());
        }
        if let Some(timeout) = cli.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        let message = &mut config.message;
        if let Some(title) = &cli.title {
            message.title = title.clone();
        }
        message
            .content_items
            .extend(cli.lines.iter().map(|line| ContentItem::text(line.clone())));
        message.content_pairs.extend(cli.pairs.iter().cloned());
        if let Some(note) = &cli.note {
            message.note = note.clone();
        }
        if cli.note_emoji {
            message.note_emoji = true;
        }
        if let Some(link) = &cli.link {
            message.link = link.clone();
        }
        if let Some(color) = cli.color {
            message.header_color = color;
        }

        config.json_logs |= cli.json_logs;
        config.dry_run = cli.dry_run;
        config.verbose = cli.verbose;

        Ok(config)
    }
}

impl ConfigProvider for NotifyConfig {
    fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for NotifyConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.webhook_url {
            validation::validate_url("webhook", url)?;
        }
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_non_empty_string("title", &self.message.title)?;
        if !self.message.link.is_empty() {
            validation::validate_url("link", &self.message.link)?;
        }
        Ok(())
    }
}
