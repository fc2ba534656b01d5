//! Forwarding completed payout requests to administrators.

use chrono::{DateTime, Local};

use crate::{
    domain::{ChatId, FileRef, Sender},
    formatting::{escape_html, format_timestamp, handle_or, shorten, visible_len},
    messaging::port::MessagingPort,
    texts,
};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";

/// A fully assembled request. Built only to be forwarded, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutRequest {
    pub from: Sender,
    pub link: String,
    pub screenshot: FileRef,
    pub wallet: String,
    pub submitted_at: DateTime<Local>,
}

impl PayoutRequest {
    /// HTML card shown to administrators (photo caption or fallback text).
    pub fn admin_card(&self) -> String {
        self.card_with(&self.link, &self.wallet)
    }

    /// The card plus the missing-screenshot annotation, within `max_len`
    /// visible characters. Link and wallet are shortened when needed, the
    /// wallet keeping at least half of what is left for both.
    pub fn fallback_text(&self, max_len: usize) -> String {
        let full = Self::annotate(self.admin_card());
        if visible_len(&full) <= max_len {
            return full;
        }

        let frame = visible_len(&Self::annotate(self.card_with("", "")));
        let budget = max_len.saturating_sub(frame);
        let wallet_len = self.wallet.chars().count().min(budget / 2);
        let link_len = budget - wallet_len;
        Self::annotate(self.card_with(
            &shorten(&self.link, link_len),
            &shorten(&self.wallet, wallet_len),
        ))
    }

    fn annotate(card: String) -> String {
        format!("{card}\n\n{}", texts::SCREENSHOT_UNAVAILABLE)
    }

    fn card_with(&self, link: &str, wallet: &str) -> String {
        format!(
            "🆕 <b>NEW PAYOUT REQUEST</b>\n\n\
             👤 <b>User:</b> {}\n\
             🆔 <b>ID:</b> <code>{}</code>\n\
             📅 <b>Date:</b> {}\n\
             {RULE}\n\n\
             🔗 <b>Gift link:</b>\n<code>{}</code>\n\n\
             💎 <b>TON wallet:</b>\n<code>{}</code>\n\n\
             {RULE}\n",
            handle_or(self.from.username.as_deref(), "no username"),
            self.from.id.0,
            format_timestamp(&self.submitted_at),
            escape_html(link),
            escape_html(wallet),
        )
    }
}

/// Outcome of one delivery round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Received the screenshot with the caption.
    pub with_photo: usize,
    /// Photo failed, plain-text fallback went through.
    pub text_only: usize,
    /// Neither attempt succeeded.
    pub unreachable: usize,
}

/// Sends payout requests to every configured administrator chat.
#[derive(Clone, Debug)]
pub struct AdminNotifier {
    admins: Vec<ChatId>,
}

impl AdminNotifier {
    pub fn new(admins: Vec<ChatId>) -> Self {
        Self { admins }
    }

    pub fn is_configured(&self) -> bool {
        !self.admins.is_empty()
    }

    /// One attempt per administrator; a failure for one never blocks the rest.
    pub async fn deliver(
        &self,
        messenger: &dyn MessagingPort,
        request: &PayoutRequest,
    ) -> DeliveryReport {
        let limits = messenger.capabilities();
        let card = request.admin_card();
        let fallback = request.fallback_text(limits.max_message_len);
        // A caption over the limit is rejected by the API anyway.
        let caption_fits = visible_len(&card) <= limits.max_caption_len;
        let mut report = DeliveryReport::default();

        for &admin in &self.admins {
            if caption_fits {
                match messenger.send_photo(admin, &request.screenshot, &card).await {
                    Ok(_) => {
                        tracing::info!(admin = admin.0, "payout request forwarded");
                        report.with_photo += 1;
                        continue;
                    }
                    Err(e) => {
                        tracing::error!(admin = admin.0, error = %e, "failed to send photo to admin");
                    }
                }
            } else {
                tracing::warn!(admin = admin.0, "caption too long, sending text only");
            }

            match messenger.send_html(admin, &fallback).await {
                Ok(_) => report.text_only += 1,
                Err(e) => {
                    tracing::debug!(admin = admin.0, error = %e, "text fallback failed too");
                    report.unreachable += 1;
                }
            }
        }

        report
    }
}
