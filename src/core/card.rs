//! 飛書互動卡片的 JSON 結構與元素建構函式
//!
//! 卡片結構文件: https://open.feishu.cn/document/uAjLw4CM/ukzMukzMukzM/feishu-cards/card-json-structure
//!
//! 卡片正文由多個元素組成：`markdown`、`plain_text`、`note`（備註）、`hr`（分割線）、
//! `column_set`（多列佈局）與 `action`（互動模組，放按鈕）。預設渲染只會用到
//! markdown 與 note，其餘建構函式給需要自訂版面的呼叫端組合使用。

use crate::domain::model::ContentValue;
use serde::{Deserialize, Serialize};

pub const MSG_TYPE_INTERACTIVE: &str = "interactive";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDocument {
    pub msg_type: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub elements: Vec<Element>,
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_link: Option<CardLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    pub title: Text,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template: String,
}

/// 整張卡片的跳轉連結，可依平台覆寫
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub android_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ios_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pc_url: String,
}

/// 多列佈局中的一列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub tag: String,
    pub width: String,
    pub weight: u32,
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vertical_align: String,
}

/// 互動組件，例如按鈕
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub tag: String,
    pub text: Text,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: ContentValue,
}

/// 卡片元素的通用結構，所有選填欄位為空時不輸出
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text_align: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flex_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub background_style: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub horizontal_spacing: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
}

impl Element {
    fn tagged(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }
}

/// 靠左對齊的 Markdown 元素
pub fn markdown(content: impl Into<String>) -> Element {
    Element {
        text_align: "left".to_string(),
        content: content.into(),
        ..Element::tagged("markdown")
    }
}

/// 置中的 Markdown 元素
pub fn markdown_center(content: impl Into<String>) -> Element {
    Element {
        text_align: "center".to_string(),
        content: content.into(),
        ..Element::tagged("markdown")
    }
}

pub fn plain_text(content: impl Into<String>) -> Element {
    Element {
        content: content.into(),
        ..Element::tagged("plain_text")
    }
}

/// 備註元素，顯示卡片內的次要資訊
pub fn note(content: impl Into<String>) -> Element {
    Element {
        elements: vec![plain_text(content)],
        ..Element::tagged("note")
    }
}

pub fn divider() -> Element {
    Element::tagged("hr")
}

fn weighted_column(vertical_align: &str, inner: Element) -> Column {
    Column {
        tag: "column".to_string(),
        width: "weighted".to_string(),
        weight: 1,
        elements: vec![inner],
        vertical_align: vertical_align.to_string(),
    }
}

pub fn column(vertical_align: &str, content: impl Into<String>) -> Column {
    weighted_column(vertical_align, markdown(content))
}

pub fn center_column(vertical_align: &str, content: impl Into<String>) -> Column {
    weighted_column(vertical_align, markdown_center(content))
}

/// 把多個列包成一個 `column_set` 元素
pub fn column_set(columns: Vec<Column>) -> Element {
    Element {
        flex_mode: "none".to_string(),
        background_style: "default".to_string(),
        horizontal_spacing: "default".to_string(),
        columns,
        ..Element::tagged("column_set")
    }
}

/// 按鈕；`kind` 為按鈕樣式，例如 `primary`、`default`、`danger`
pub fn action(
    text: impl Into<String>,
    url: impl Into<String>,
    kind: impl Into<String>,
    value: ContentValue,
) -> Action {
    Action {
        tag: "button".to_string(),
        text: Text {
            content: text.into(),
            tag: "plain_text".to_string(),
        },
        url: url.into(),
        kind: kind.into(),
        value,
    }
}

/// 把多個按鈕包成一個 `action` 互動模組
pub fn action_block(actions: Vec<Action>) -> Element {
    Element {
        actions,
        ..Element::tagged("action")
    }
}
