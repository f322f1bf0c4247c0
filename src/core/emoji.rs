use rand::Rng;

/// 備註前後可附加的 emoji 表
#[rustfmt::skip]
pub const NOTE_EMOJIS: [&str; 110] = [
    "👍", "👏", "👌", "👊", "✌", "👋", "👆", "👇", "👈", "👉",
    "👎", "👓", "👔", "👕", "👖", "👗", "👘", "👙", "👚", "👛",
    "👜", "👝", "👞", "👟", "👠", "👡", "👢", "👣", "👤", "👥",
    "👦", "👧", "👨", "👩", "👪", "👫", "👬", "👭", "👮", "👯",
    "👰", "👱", "👲", "👳", "👴", "👵", "👶", "👷", "👸", "👹",
    "👺", "👻", "👼", "👽", "👾", "👿", "💀", "💁", "💂", "💃",
    "💄", "💅", "💆", "💇", "💈", "💉", "💊", "💋", "💌", "💍",
    "💎", "💏", "💐", "💑", "💒", "💓", "💔", "💕", "💖", "💗",
    "💘", "💙", "💚", "💛", "💜", "💝", "💞", "💟", "💠", "💡",
    "💢", "💣", "💤", "💥", "💦", "💧", "💨", "💩", "💪", "💫",
    "💬", "💭", "💮", "💯", "💰", "💱", "💲", "💳", "💴", "💵",
];

/// 從表中均勻隨機挑一個 emoji
pub fn pick_emoji<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NOTE_EMOJIS[rng.random_range(0..NOTE_EMOJIS.len())]
}

/// 以同一個 emoji 包住備註：`emoji + note + emoji`
pub fn wrap_with_emoji<R: Rng + ?Sized>(note: &str, rng: &mut R) -> String {
    let emoji = pick_emoji(rng);
    format!("{emoji}{note}{emoji}")
}
