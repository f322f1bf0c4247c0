use anyhow::Result;
use feishu_notify::utils::validation::Validate;
use feishu_notify::{ConfigProvider, Notifier, NotifyConfig, ReqwestTransport, TomlConfig};
use httpmock::prelude::*;
use tempfile::TempDir;

/// 從 TOML 訊息檔載入設定並發送到 mock webhook
#[tokio::test]
async fn test_message_file_end_to_end() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/open-apis/bot/v2/hook/file-token")
            .json_body_partial(
                r#"{
                    "card": {
                        "header": {"title": {"content": "Nightly build"}, "template": "red"},
                        "card_link": {"url": "https://ci.example.com/runs/7"}
                    }
                }"#,
            );
        then.status(200).body(r#"{"code":0,"msg":"success"}"#);
    });

    std::env::set_var("FEISHU_NOTIFY_IT_HOOK", server.url("/open-apis/bot/v2/hook/file-token"));

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("message.toml");
    tokio::fs::write(
        &config_path,
        r#"
[webhook]
url = "${FEISHU_NOTIFY_IT_HOOK}"
timeout_seconds = 10

[message]
title = "Nightly build"
note = "scheduled"
link = "https://ci.example.com/runs/7"
header_color = "red"
markdown_array = [["Branch", "main"], ["Failed", "3"]]
"#,
    )
    .await?;

    let file = TomlConfig::from_file(&config_path)?;
    file.validate()?;

    let config = NotifyConfig::from_toml(file);
    config.validate()?;
    assert_eq!(config.message.content_pairs.len(), 2);

    let notifier = Notifier::new(ReqwestTransport::from_config(&config)?);
    let mut message = config.message.clone();
    let body = notifier.deliver(config.require_webhook()?, &mut message).await?;

    hook.assert();
    assert_eq!(body, r#"{"code":0,"msg":"success"}"#);
    assert_eq!(message.response.as_deref(), Some(body.as_str()));

    std::env::remove_var("FEISHU_NOTIFY_IT_HOOK");
    Ok(())
}
