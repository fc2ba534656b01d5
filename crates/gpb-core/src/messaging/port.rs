use async_trait::async_trait;

use crate::{
    domain::{ChatId, FileRef},
    messaging::types::{MessagingCapabilities, ReplyKeyboard},
    Result,
};

/// Outbound messenger port.
///
/// The conversation core only talks to Telegram through this trait; the teloxide
/// implementation lives in `gpb-telegram`.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<()>;

    async fn send_html_with_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: ReplyKeyboard,
    ) -> Result<()>;

    /// Send a previously received photo by reference, with an HTML caption.
    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &FileRef,
        caption_html: &str,
    ) -> Result<()>;
}
