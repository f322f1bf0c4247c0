use crate::utils::error::{NotifyError, Result};
use async_trait::async_trait;

/// 送出已編碼卡片的傳輸層
///
/// 實作負責一次 POST：成功 (2xx) 時回傳完整回應內容，非 2xx 回傳
/// `NotifyError::NonSuccessStatus`，其餘依失敗階段對應到各錯誤種類。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, endpoint: &str, payload: Vec<u8>) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn webhook_url(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;

    /// 發送前必須有 webhook，空字串視同未設定
    fn require_webhook(&self) -> Result<&str> {
        match self.webhook_url() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(NotifyError::MissingConfigError {
                field: "webhook".to_string(),
            }),
        }
    }
}
