//! Telegram adapter (teloxide).
//!
//! This crate implements the `gpb-core` MessagingPort over the Telegram Bot API
//! and feeds incoming updates into the conversation.

use std::future::IntoFuture;

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InputFile, KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode, ReplyMarkup},
};

pub mod handlers;
pub mod router;

use gpb_core::{
    domain::{ChatId, FileRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{MessagingCapabilities, ReplyKeyboard},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn markup(keyboard: ReplyKeyboard) -> ReplyMarkup {
        match keyboard {
            ReplyKeyboard::Buttons(rows) => {
                let rows: Vec<Vec<KeyboardButton>> = rows
                    .into_iter()
                    .map(|row| row.into_iter().map(KeyboardButton::new).collect())
                    .collect();
                ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard(true))
            }
            ReplyKeyboard::Remove => ReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
        }
    }

    /// Await a single Bot API call. Flood-control (`RetryAfter`) is reported
    /// like any other failure.
    async fn call_once<T, R>(request: R) -> Result<T>
    where
        R: IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
    {
        request.await.map_err(Self::map_err)
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    fn capabilities(&self) -> MessagingCapabilities {
        MessagingCapabilities {
            max_message_len: 4096,
            max_caption_len: 1024,
        }
    }

    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<()> {
        Self::call_once(
            self.bot
                .send_message(Self::tg_chat(chat_id), html.to_string())
                .parse_mode(ParseMode::Html),
        )
        .await?;
        Ok(())
    }

    async fn send_html_with_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: ReplyKeyboard,
    ) -> Result<()> {
        Self::call_once(
            self.bot
                .send_message(Self::tg_chat(chat_id), html.to_string())
                .parse_mode(ParseMode::Html)
                .reply_markup(Self::markup(keyboard)),
        )
        .await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &FileRef,
        caption_html: &str,
    ) -> Result<()> {
        Self::call_once(
            self.bot
                .send_photo(Self::tg_chat(chat_id), InputFile::file_id(photo.0.clone()))
                .caption(caption_html.to_string())
                .parse_mode(ParseMode::Html),
        )
        .await?;
        Ok(())
    }
}
