use std::env;

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_PORT: u16 = 10000;

/// Where the process is running; display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Render,
    Local,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Render => "Render.com",
            Platform::Local => "local",
        }
    }
}

/// Typed configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// Chats that receive completed payout requests. Empty means unconfigured.
    pub admin_ids: Vec<ChatId>,
    /// Health-check listen port.
    pub port: u16,
    pub platform: Platform,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn load() -> Result<Self> {
        // Existing env vars are never overridden by `.env`.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key -> value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN").unwrap_or_default().trim().to_string();
        if bot_token.is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required (set it in .env or the hosting dashboard)"
                    .to_string(),
            ));
        }

        let admin_ids = parse_csv_i64(lookup("ADMIN_ID"))
            .into_iter()
            .map(ChatId)
            .collect();

        let port = lookup("PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let platform = match lookup("RENDER").and_then(non_empty) {
            Some(_) => Platform::Render,
            None => Platform::Local,
        };

        Ok(Self {
            bot_token,
            admin_ids,
            port,
            platform,
        })
    }

    pub fn has_admins(&self) -> bool {
        !self.admin_ids.is_empty()
    }

    pub fn is_admin(&self, chat_id: ChatId) -> bool {
        self.admin_ids.contains(&chat_id)
    }
}

fn parse_csv_i64(v: Option<String>) -> Vec<i64> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<i64>().ok())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
