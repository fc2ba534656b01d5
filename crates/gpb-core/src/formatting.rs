//! Formatting utilities for Telegram HTML parse mode.

use chrono::{DateTime, TimeZone};

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `@username`, or `fallback` when the user has none.
pub fn handle_or(username: Option<&str>, fallback: &str) -> String {
    match username {
        Some(u) if !u.trim().is_empty() => format!("@{}", escape_html(u)),
        _ => fallback.to_string(),
    }
}

/// Length of `html` as Telegram counts it after parsing: tags are dropped and
/// every entity (`&amp;`) is one character.
pub fn visible_len(html: &str) -> usize {
    let mut len = 0;
    let mut chars = html.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' => {
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
            }
            '&' => {
                while let Some(&c) = chars.peek() {
                    chars.next();
                    if c == ';' {
                        break;
                    }
                }
                len += 1;
            }
            _ => len += 1,
        }
    }
    len
}

/// At most `max` characters of `text`; a cut is marked with a trailing `…`.
pub fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    match max {
        0 => String::new(),
        _ => {
            let mut out: String = text.chars().take(max - 1).collect();
            out.push('…');
            out
        }
    }
}

pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
