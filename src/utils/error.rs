use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Webhook URL is empty")]
    EmptyEndpoint,

    #[error("Failed to encode card payload: {0}")]
    PayloadEncoding(#[from] serde_json::Error),

    #[error("Failed to create request: {message}")]
    RequestConstruction { message: String },

    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request failed with status code {status}")]
    NonSuccessStatus { status: u16 },

    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Payload,
    Network,
    Remote,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NotifyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NotifyError::EmptyEndpoint
            | NotifyError::ConfigError { .. }
            | NotifyError::InvalidConfigValueError { .. }
            | NotifyError::MissingConfigError { .. } => ErrorCategory::Configuration,
            NotifyError::PayloadEncoding(_) => ErrorCategory::Payload,
            NotifyError::RequestConstruction { .. } | NotifyError::Transport(_) => {
                ErrorCategory::Network
            }
            NotifyError::NonSuccessStatus { .. } | NotifyError::ResponseRead(_) => {
                ErrorCategory::Remote
            }
            NotifyError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 訊息已送達，只是回應讀不完整
            NotifyError::ResponseRead(_) => ErrorSeverity::Low,
            NotifyError::Transport(_) => ErrorSeverity::Medium,
            NotifyError::NonSuccessStatus { status } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            NotifyError::IoError(_) | NotifyError::PayloadEncoding(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 是否值得由呼叫端自行重試（本函式庫從不重試）
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NotifyError::EmptyEndpoint => "No webhook URL was provided".to_string(),
            NotifyError::PayloadEncoding(_) => {
                "The message could not be encoded as a card".to_string()
            }
            NotifyError::RequestConstruction { message } => {
                format!("The webhook request could not be built: {}", message)
            }
            NotifyError::Transport(e) if e.is_timeout() => {
                "The webhook did not respond in time".to_string()
            }
            NotifyError::Transport(_) => "Could not reach the webhook endpoint".to_string(),
            NotifyError::NonSuccessStatus { status } => {
                format!("The webhook rejected the message (HTTP {})", status)
            }
            NotifyError::ResponseRead(_) => {
                "The message was sent but the response could not be read".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the webhook URL and message settings (flags, TOML file or FEISHU_WEBHOOK)"
            }
            ErrorCategory::Payload => "Check the content values placed in the message",
            ErrorCategory::Network => "Check network connectivity and the webhook host",
            ErrorCategory::Remote => {
                "Check that the bot is still enabled in the group and the webhook is valid"
            }
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
