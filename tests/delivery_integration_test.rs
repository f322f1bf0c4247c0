use feishu_notify::{deliver, MessageDescription, Notifier, NotifyError, ReqwestTransport};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn sample_message() -> MessageDescription {
    MessageDescription::new("T")
        .with_pair("A", "1")
        .with_pair("B", "2")
        .with_note("N")
}

#[tokio::test]
async fn test_deliver_posts_card_and_returns_body() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/open-apis/bot/v2/hook/test-token")
            .header("content-type", "application/json")
            .json_body(json!({
                "msg_type": "interactive",
                "card": {
                    "elements": [
                        {"tag": "markdown", "text_align": "left", "content": "**A**：1\n**B**：2\n"},
                        {"tag": "note", "elements": [{"tag": "plain_text", "content": "N"}]}
                    ],
                    "header": {"title": {"content": "T", "tag": "plain_text"}}
                }
            }));
        then.status(200).body("ok");
    });

    let mut message = sample_message();
    let body = deliver(&server.url("/open-apis/bot/v2/hook/test-token"), &mut message)
        .await
        .unwrap();

    hook.assert();
    assert_eq!(body, "ok");
    assert_eq!(message.response.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_deliver_server_error_is_non_success_status() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/hook");
        then.status(500).body("internal error");
    });

    let mut message = sample_message();
    let result = deliver(&server.url("/hook"), &mut message).await;

    hook.assert_hits(1);
    match result {
        Err(NotifyError::NonSuccessStatus { status }) => assert_eq!(status, 500),
        other => panic!("expected NonSuccessStatus(500), got {:?}", other),
    }
    assert!(message.response.is_none());
}

#[tokio::test]
async fn test_deliver_empty_endpoint_never_reaches_server() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let notifier = Notifier::new(ReqwestTransport::with_default_timeout().unwrap());
    let mut message = sample_message();
    let result = notifier.deliver("", &mut message).await;

    assert!(matches!(result, Err(NotifyError::EmptyEndpoint)));
    hook.assert_hits(0);
}

#[tokio::test]
async fn test_deliver_connection_refused_is_transport_error() {
    // 取一個空閒的 port 後立刻釋放，確保沒有人在聽
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let notifier = Notifier::new(ReqwestTransport::new(Duration::from_secs(5)).unwrap());
    let mut message = sample_message();
    let result = notifier
        .deliver(&format!("http://127.0.0.1:{}/hook", port), &mut message)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, NotifyError::Transport(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_feishu_business_error_body_is_returned_verbatim() {
    // 飛書在 token 錯誤時仍回 200，錯誤碼放在 body 裡
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/hook");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "code": 19001,
                "msg": "param invalid: incoming webhook access token invalid"
            }));
    });

    let mut message = sample_message();
    let body = deliver(&server.url("/hook"), &mut message).await.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["code"], 19001);
}

/// 讀完一個完整請求（header + Content-Length 的 body）
async fn read_request(socket: &mut tokio::net::TcpStream) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let body_len = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return Ok(());
            }
        }
    }
}

#[tokio::test]
async fn test_truncated_response_body_is_response_read_error() {
    // 回 200 但 body 比 Content-Length 短就斷線
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.flush().await.unwrap();
    });

    let notifier = Notifier::new(ReqwestTransport::new(Duration::from_secs(5)).unwrap());
    let mut message = sample_message();
    let result = notifier
        .deliver(&format!("http://{}/hook", addr), &mut message)
        .await;
    server.await.unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, NotifyError::ResponseRead(_)), "got {:?}", err);
    assert!(message.response.is_none());
    assert!(!err.is_retryable());
}
