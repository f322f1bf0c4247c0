pub mod card;
pub mod delivery;
pub mod emoji;
pub mod render;

pub use crate::domain::model::{ContentItem, ContentValue, HeaderColor, MessageDescription};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
