//! Core domain + application logic for the gift payout bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! (`messaging::port::MessagingPort`) implemented in `gpb-telegram`.

pub mod config;
pub mod conversation;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod notify;
pub mod texts;

pub use errors::{Error, Result};
