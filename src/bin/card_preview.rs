use feishu_notify::core::card::{self, CardDocument};
use feishu_notify::{render, HeaderColor, MessageDescription};
use serde_json::json;

/// 印出幾種常見訊息渲染後的卡片 JSON，不會發送任何請求
fn main() -> anyhow::Result<()> {
    // 使用 map：順序可能每次不同
    let with_map = MessageDescription::new("使用 Map 的消息")
        .with_entry("狀態", "運行中")
        .with_entry("時間", "2024-01-01 12:00:00")
        .with_entry("結果", "成功")
        .with_note("使用 map 可能導致順序不固定")
        .with_header_color(HeaderColor::Blue);

    // 使用有序項目：沒有 label 的行原樣輸出
    let with_items = MessageDescription::new("使用有序項目的消息")
        .with_item("第一步", "初始化系統")
        .with_item("第二步", "加載配置文件")
        .with_line("**第三步**：啟動服務")
        .with_item("狀態", "<font color='green'>成功</font>")
        .with_note("有序項目保持固定順序")
        .with_header_color(HeaderColor::Green);

    let with_pairs = MessageDescription::new("使用鍵值對的消息")
        .with_pair("服務", "api-gateway")
        .with_pair("版本", "v1.4.2")
        .with_note("部署完成")
        .with_note_emoji(true)
        .with_link("https://www.feishu.cn")
        .with_header_color(HeaderColor::Wathet);

    for (label, message) in [
        ("map", &with_map),
        ("items", &with_items),
        ("pairs", &with_pairs),
    ] {
        let doc = render(message);
        println!("=== {} ({}) ===", label, doc.card.header.title.content);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }

    println!("=== custom layout ===");
    println!("{}", serde_json::to_string_pretty(&custom_layout())?);

    Ok(())
}

/// 用建構函式自行組合版面：兩欄、分割線、按鈕
fn custom_layout() -> CardDocument {
    let mut doc = render(
        &MessageDescription::new("自訂版面")
            .with_note("custom")
            .with_header_color(HeaderColor::Orange),
    );

    let note = doc.card.elements.pop();
    doc.card.elements.extend([
        card::column_set(vec![
            card::center_column("top", "**成功**\n128"),
            card::center_column("top", "**失敗**\n3"),
        ]),
        card::divider(),
        card::action_block(vec![card::action(
            "查看詳情",
            "https://ci.example.com/runs/42",
            "primary",
            json!({"run": 42}),
        )]),
    ]);
    doc.card.elements.extend(note);
    doc
}
