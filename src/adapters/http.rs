use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{NotifyError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 以 reqwest 實作的 webhook 傳輸
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::RequestConstruction {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    pub fn with_default_timeout() -> Result<Self> {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(Duration::from_secs(config.timeout_seconds()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, endpoint: &str, payload: Vec<u8>) -> Result<String> {
        let url = Url::parse(endpoint).map_err(|e| NotifyError::RequestConstruction {
            message: format!("invalid webhook URL: {}", e),
        })?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    NotifyError::RequestConstruction {
                        message: e.to_string(),
                    }
                } else {
                    NotifyError::Transport(e)
                }
            })?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        if !status.is_success() {
            return Err(NotifyError::NonSuccessStatus {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(NotifyError::ResponseRead)
    }
}
