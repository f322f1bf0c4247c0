use crate::domain::model::HeaderColor;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "feishu-notify")]
#[command(about = "Send a formatted card message to a Feishu/Lark bot webhook")]
pub struct CliConfig {
    /// Webhook URL (falls back to the TOML file, then FEISHU_WEBHOOK)
    #[arg(long)]
    pub webhook: Option<String>,

    /// Path to a TOML file describing the webhook and message
    #[arg(short, long)]
    pub config: Option<String>,

    /// Card title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Labeled line, rendered in order as **KEY**：VALUE (repeatable)
    #[arg(long = "pair", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,

    /// Unlabeled line, rendered verbatim (repeatable)
    #[arg(long = "line", value_name = "TEXT")]
    pub lines: Vec<String>,

    /// Footnote; defaults to the current time
    #[arg(long)]
    pub note: Option<String>,

    /// Wrap the footnote in a random emoji
    #[arg(long)]
    pub note_emoji: bool,

    /// URL opened when the card is clicked
    #[arg(long)]
    pub link: Option<String>,

    /// Header color: blue, wathet, turquoise, green, yellow, orange, red,
    /// carmine, violet, grey or default
    #[arg(long)]
    pub color: Option<HeaderColor>,

    #[arg(long, help = "Request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Print the card JSON instead of sending it")]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}
