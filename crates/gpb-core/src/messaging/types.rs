use crate::domain::{ChatId, FileRef, Sender};

/// Messenger-agnostic incoming message.
///
/// Telegram-specific fields stay in the Telegram adapter.
#[derive(Clone, Debug)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub from: Sender,
    pub content: Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// `/name args`, with any `@botname` suffix already stripped.
    Command { name: String, args: String },
    Text(String),
    /// Highest-resolution variant of a photo.
    Photo(FileRef),
    /// Stickers, documents, voice, ... Nothing the bot accepts.
    Other,
}

/// Reply keyboard attached to an outgoing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyKeyboard {
    /// Persistent keyboard, one row per inner vec.
    Buttons(Vec<Vec<String>>),
    /// Hide whatever keyboard is currently shown.
    Remove,
}

impl ReplyKeyboard {
    /// Convenience for a keyboard with a single button.
    pub fn single(label: &str) -> Self {
        Self::Buttons(vec![vec![label.to_string()]])
    }
}

/// Length limits of a messenger implementation, in visible characters.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub max_message_len: usize,
    pub max_caption_len: usize,
}

/// Split `/cmd@botname arg1 ...` into a lowercase command name and its args.
///
/// Returns `None` for text that is not a command.
pub fn parse_command(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let mut parts = text.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    if cmd.is_empty() {
        return None;
    }
    Some((cmd, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(
            parse_command("/start"),
            Some(("start".to_string(), String::new()))
        );
        assert_eq!(
            parse_command("/GetId@payout_bot  now please"),
            Some(("getid".to_string(), "now please".to_string()))
        );
    }

    #[test]
    fn non_commands_are_rejected() {
        assert_eq!(parse_command("hello /start"), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("t.me/nft/gift-1"), None);
    }
}
