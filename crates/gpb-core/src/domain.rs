/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Server-side reference to an uploaded photo (Telegram `file_id`).
///
/// Only valid for the bot that received it; it may also expire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileRef(pub String);

/// Who sent an incoming message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub username: Option<String>,
}
