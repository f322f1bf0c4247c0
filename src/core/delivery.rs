use crate::adapters::http::ReqwestTransport;
use crate::core::render::render;
use crate::domain::model::MessageDescription;
use crate::domain::ports::Transport;
use crate::utils::error::{NotifyError, Result};
use crate::utils::validation::redact_webhook;

/// 把訊息渲染成卡片並送到 webhook，每次呼叫只發一次請求
pub struct Notifier<T: Transport> {
    transport: T,
}

impl<T: Transport> Notifier<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// 發送訊息；成功時回傳 webhook 回應內容，並寫入 `desc.response`
    pub async fn deliver(&self, endpoint: &str, desc: &mut MessageDescription) -> Result<String> {
        if endpoint.is_empty() {
            return Err(NotifyError::EmptyEndpoint);
        }

        let card = render(desc);
        let payload = serde_json::to_vec(&card)?;

        tracing::debug!(
            "Posting card '{}' ({} elements, {} bytes) to {}",
            desc.title,
            card.card.elements.len(),
            payload.len(),
            redact_webhook(endpoint)
        );

        match self.transport.post_json(endpoint, payload).await {
            Ok(body) => {
                tracing::debug!("Webhook response: {}", body);
                desc.response = Some(body.clone());
                Ok(body)
            }
            Err(e) => {
                tracing::warn!("Failed to deliver card '{}': {}", desc.title, e);
                Err(e)
            }
        }
    }
}

/// 使用預設 HTTP 傳輸（30 秒逾時）發送訊息
pub async fn deliver(endpoint: &str, desc: &mut MessageDescription) -> Result<String> {
    if endpoint.is_empty() {
        return Err(NotifyError::EmptyEndpoint);
    }
    let notifier = Notifier::new(ReqwestTransport::with_default_timeout()?);
    notifier.deliver(endpoint, desc).await
}
