use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 自由格式的內容值，可以是字串、數字、布林或巢狀結構
pub type ContentValue = serde_json::Value;

/// 卡片標題列的顏色主題
///
/// 反序列化走 `FromStr`，與命令列一樣不分大小寫、空字串視為預設色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HeaderColor {
    Blue,
    Wathet,
    Turquoise,
    Green,
    Yellow,
    Orange,
    Red,
    Carmine,
    Violet,
    Grey,
    #[default]
    Default,
}

impl HeaderColor {
    pub const ALL: [HeaderColor; 11] = [
        HeaderColor::Blue,
        HeaderColor::Wathet,
        HeaderColor::Turquoise,
        HeaderColor::Green,
        HeaderColor::Yellow,
        HeaderColor::Orange,
        HeaderColor::Red,
        HeaderColor::Carmine,
        HeaderColor::Violet,
        HeaderColor::Grey,
        HeaderColor::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderColor::Blue => "blue",
            HeaderColor::Wathet => "wathet",
            HeaderColor::Turquoise => "turquoise",
            HeaderColor::Green => "green",
            HeaderColor::Yellow => "yellow",
            HeaderColor::Orange => "orange",
            HeaderColor::Red => "red",
            HeaderColor::Carmine => "carmine",
            HeaderColor::Violet => "violet",
            HeaderColor::Grey => "grey",
            HeaderColor::Default => "default",
        }
    }

    /// 卡片 header 的 template 值；預設色回傳空字串，交給平台決定樣式
    pub fn template(&self) -> &'static str {
        match self {
            HeaderColor::Default => "",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for HeaderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Ok(HeaderColor::Default);
        }
        HeaderColor::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = HeaderColor::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown header color '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

impl TryFrom<String> for HeaderColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// 有序內容項目；label 為空時直接輸出 text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, alias = "tag")]
    pub label: String,
    #[serde(default, alias = "content")]
    pub text: String,
}

impl ContentItem {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }
}

/// 呼叫端描述要發送的訊息
///
/// 三種內容形式可以同時使用，渲染時依序輸出 `content_map`、`content_items`、
/// `content_pairs`。`content_map` 是 `HashMap`，輸出順序不固定；需要穩定順序
/// （例如 golden test）請改用兩種有序形式。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDescription {
    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "markdown", skip_serializing_if = "HashMap::is_empty")]
    pub content_map: HashMap<String, ContentValue>,

    #[serde(default, alias = "markdown_items", skip_serializing_if = "Vec::is_empty")]
    pub content_items: Vec<ContentItem>,

    #[serde(default, alias = "markdown_array", skip_serializing_if = "Vec::is_empty")]
    pub content_pairs: Vec<(String, String)>,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub note_emoji: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,

    #[serde(default)]
    pub header_color: HeaderColor,

    /// 發送成功後的 webhook 回應內容
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl MessageDescription {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, value: impl Into<ContentValue>) -> Self {
        self.content_map.insert(label.into(), value.into());
        self
    }

    pub fn with_item(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.content_items.push(ContentItem::new(label, text));
        self
    }

    pub fn with_line(mut self, text: impl Into<String>) -> Self {
        self.content_items.push(ContentItem::text(text));
        self
    }

    pub fn with_pair(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.content_pairs.push((label.into(), text.into()));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_note_emoji(mut self, enabled: bool) -> Self {
        self.note_emoji = enabled;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_header_color(mut self, color: HeaderColor) -> Self {
        self.header_color = color;
        self
    }

    pub fn has_content(&self) -> bool {
        !self.content_map.is_empty()
            || !self.content_items.is_empty()
            || !self.content_pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_color_template() {
        assert_eq!(HeaderColor::Default.template(), "");
        assert_eq!(HeaderColor::Wathet.template(), "wathet");
        assert_eq!(HeaderColor::default(), HeaderColor::Default);
    }

    #[test]
    fn test_header_color_from_str() {
        assert_eq!("Red".parse::<HeaderColor>().unwrap(), HeaderColor::Red);
        assert_eq!(" grey ".parse::<HeaderColor>().unwrap(), HeaderColor::Grey);
        assert_eq!("".parse::<HeaderColor>().unwrap(), HeaderColor::Default);
        assert!("pink".parse::<HeaderColor>().is_err());
    }

    #[test]
    fn test_header_color_deserialize_matches_parse() {
        let color: HeaderColor = serde_json::from_value(serde_json::json!("Red")).unwrap();
        assert_eq!(color, HeaderColor::Red);
        let color: HeaderColor = serde_json::from_value(serde_json::json!("")).unwrap();
        assert_eq!(color, HeaderColor::Default);
        assert!(serde_json::from_value::<HeaderColor>(serde_json::json!("pink")).is_err());

        // 輸出仍是小寫名稱
        assert_eq!(serde_json::to_value(HeaderColor::Wathet).unwrap(), "wathet");
    }

    #[test]
    fn test_builder_methods() {
        let msg = MessageDescription::new("Deploy")
            .with_entry("count", 3)
            .with_item("Stage", "build")
            .with_line("plain line")
            .with_pair("Result", "ok")
            .with_note("done")
            .with_link("https://example.com")
            .with_header_color(HeaderColor::Green);

        assert_eq!(msg.title, "Deploy");
        assert_eq!(msg.content_map.get("count"), Some(&serde_json::json!(3)));
        assert_eq!(msg.content_items[1], ContentItem::text("plain line"));
        assert_eq!(msg.content_pairs, vec![("Result".to_string(), "ok".to_string())]);
        assert!(msg.has_content());
        assert!(!MessageDescription::new("empty").has_content());
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let msg: MessageDescription = serde_json::from_value(serde_json::json!({
            "title": "legacy",
            "markdown": {"k": "v"},
            "markdown_items": [{"tag": "A", "content": "1"}],
            "markdown_array": [["B", "2"]],
            "header_color": "violet",
            "response": "ignored"
        }))
        .unwrap();

        assert_eq!(msg.content_map.len(), 1);
        assert_eq!(msg.content_items, vec![ContentItem::new("A", "1")]);
        assert_eq!(msg.content_pairs, vec![("B".to_string(), "2".to_string())]);
        assert_eq!(msg.header_color, HeaderColor::Violet);
        assert_eq!(msg.response, None);
    }
}
