//! Telegram update handlers.
//!
//! Every message is converted into a messenger-agnostic `IncomingMessage` and
//! handed to the conversation, which owns all routing decisions.

use std::sync::Arc;

use teloxide::prelude::*;

use gpb_core::{
    domain::{ChatId, FileRef, Sender, UserId},
    messaging::types::{parse_command, Content, IncomingMessage},
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(incoming) = to_incoming(&msg) else {
        // Channel posts and service messages have no sender.
        return Ok(());
    };
    let chat_id = incoming.chat_id.0;

    if let Err(e) = state.conversation.handle(incoming).await {
        tracing::warn!(chat = chat_id, error = %e, "failed to answer message");
    }

    Ok(())
}

fn to_incoming(msg: &Message) -> Option<IncomingMessage> {
    let user = msg.from()?;

    // Telegram lists photo sizes smallest first.
    let best_photo = msg.photo().and_then(|sizes| sizes.last());

    Some(IncomingMessage {
        chat_id: ChatId(msg.chat.id.0),
        from: Sender {
            id: UserId(user.id.0 as i64),
            username: user.username.clone(),
        },
        content: content_from_parts(msg.text(), best_photo.map(|p| p.file.id.as_str())),
    })
}

fn content_from_parts(text: Option<&str>, best_photo_id: Option<&str>) -> Content {
    if let Some(file_id) = best_photo_id {
        return Content::Photo(FileRef(file_id.to_string()));
    }

    match text {
        Some(text) => match parse_command(text) {
            Some((name, args)) => Content::Command { name, args },
            None => Content::Text(text.to_string()),
        },
        None => Content::Other,
    }
}
