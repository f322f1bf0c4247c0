use crate::core::card::{self, Card, CardDocument, CardLink, Header, Text, MSG_TYPE_INTERACTIVE};
use crate::core::emoji::wrap_with_emoji;
use crate::domain::model::{ContentValue, MessageDescription};
use chrono::{Local, NaiveDateTime};
use rand::Rng;

pub const NOTE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 把訊息描述渲染成一張互動卡片
///
/// 永遠成功；即使沒有任何內容也會產生只含備註的卡片。
pub fn render(desc: &MessageDescription) -> CardDocument {
    render_with(desc, &mut rand::rng(), Local::now().naive_local())
}

/// 與 [`render`] 相同，但由呼叫端提供亂數來源與時間
pub fn render_with<R: Rng + ?Sized>(
    desc: &MessageDescription,
    rng: &mut R,
    now: NaiveDateTime,
) -> CardDocument {
    let mut elements = Vec::new();

    let content = build_markdown_content(desc);
    if !content.is_empty() {
        elements.push(card::markdown(content));
    }

    elements.push(card::note(build_note_content(desc, rng, now)));

    let card_link = if desc.link.is_empty() {
        None
    } else {
        Some(CardLink {
            url: desc.link.clone(),
            ..Default::default()
        })
    };

    CardDocument {
        msg_type: MSG_TYPE_INTERACTIVE.to_string(),
        card: Card {
            elements,
            header: Header {
                title: Text {
                    content: desc.title.clone(),
                    tag: "plain_text".to_string(),
                },
                template: desc.header_color.template().to_string(),
            },
            card_link,
        },
    }
}

/// 依序合併 content_map、content_items、content_pairs 的 markdown 文字
pub fn build_markdown_content(desc: &MessageDescription) -> String {
    let mut md = String::new();

    // map 的迭代順序不固定
    for (label, value) in &desc.content_map {
        push_labeled(&mut md, label, &display_value(value));
    }

    for item in &desc.content_items {
        if item.label.is_empty() {
            md.push_str(&item.text);
            md.push('\n');
        } else {
            push_labeled(&mut md, &item.label, &item.text);
        }
    }

    for (label, text) in &desc.content_pairs {
        push_labeled(&mut md, label, text);
    }

    md
}

pub fn build_note_content<R: Rng + ?Sized>(
    desc: &MessageDescription,
    rng: &mut R,
    now: NaiveDateTime,
) -> String {
    let note = if desc.note.is_empty() {
        now.format(NOTE_TIME_FORMAT).to_string()
    } else {
        desc.note.clone()
    };

    if desc.note_emoji {
        wrap_with_emoji(&note, rng)
    } else {
        note
    }
}

fn push_labeled(md: &mut String, label: &str, text: &str) {
    md.push_str(&format!("**{}**：{}\n", label, text));
}

fn display_value(value: &ContentValue) -> String {
    match value {
        ContentValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
