//! In-memory `MessagingPort` that records every outbound call.

use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;

use crate::{
    domain::{ChatId, FileRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{MessagingCapabilities, ReplyKeyboard},
    },
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Html {
        chat_id: ChatId,
        html: String,
        keyboard: Option<ReplyKeyboard>,
    },
    Photo {
        chat_id: ChatId,
        photo: FileRef,
        caption: String,
    },
}

impl Sent {
    pub fn chat_id(&self) -> ChatId {
        match self {
            Sent::Html { chat_id, .. } | Sent::Photo { chat_id, .. } => *chat_id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Sent::Html { html, .. } => html,
            Sent::Photo { caption, .. } => caption,
        }
    }
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    /// Attempts, including failed ones.
    attempts: Mutex<Vec<Sent>>,
    photo_fails: Mutex<HashSet<i64>>,
    unreachable: Mutex<HashSet<i64>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photo sends to `chat_id` fail; text still works.
    pub fn fail_photos_for(&self, chat_id: i64) {
        self.photo_fails.lock().unwrap().insert(chat_id);
    }

    /// Every send to `chat_id` fails.
    pub fn block(&self, chat_id: i64) {
        self.unreachable.lock().unwrap().insert(chat_id);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| s.chat_id() == ChatId(chat_id))
            .collect()
    }

    pub fn attempts_to(&self, chat_id: i64) -> Vec<Sent> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.chat_id() == ChatId(chat_id))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        self.attempts.lock().unwrap().clear();
    }

    fn record(&self, msg: Sent) -> Result<()> {
        let chat_id = msg.chat_id();
        self.attempts.lock().unwrap().push(msg.clone());

        if self.unreachable.lock().unwrap().contains(&chat_id.0) {
            return Err(Error::External("telegram error: chat not found".to_string()));
        }
        if matches!(msg, Sent::Photo { .. }) && self.photo_fails.lock().unwrap().contains(&chat_id.0)
        {
            return Err(Error::External(
                "telegram error: wrong file identifier".to_string(),
            ));
        }

        self.sent.lock().unwrap().push(msg);
        Ok(())
    }
}

#[async_trait]
impl MessagingPort for RecordingMessenger {
    fn capabilities(&self) -> MessagingCapabilities {
        MessagingCapabilities {
            max_message_len: 4096,
            max_caption_len: 1024,
        }
    }

    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<()> {
        self.record(Sent::Html {
            chat_id,
            html: html.to_string(),
            keyboard: None,
        })
    }

    async fn send_html_with_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: ReplyKeyboard,
    ) -> Result<()> {
        self.record(Sent::Html {
            chat_id,
            html: html.to_string(),
            keyboard: Some(keyboard),
        })
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &FileRef,
        caption_html: &str,
    ) -> Result<()> {
        self.record(Sent::Photo {
            chat_id,
            photo: photo.clone(),
            caption: caption_html.to_string(),
        })
    }
}
