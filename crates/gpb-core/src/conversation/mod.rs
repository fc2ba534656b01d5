//! The payout-request conversation.
//!
//! `Idle -> WaitingForLink -> WaitingForScreenshot -> WaitingForWallet -> Idle`,
//! one chat at a time. The messenger serializes updates per chat, so the store
//! never sees two concurrent writers for the same chat.

pub mod stage;
pub mod store;

use std::sync::Arc;

use chrono::Local;

use crate::{
    config::Config,
    domain::{ChatId, FileRef, Sender},
    messaging::{
        port::MessagingPort,
        types::{IncomingMessage, ReplyKeyboard},
    },
    notify::{AdminNotifier, PayoutRequest},
    texts, Result,
};

use stage::{has_wallet_prefix, route, Input, Route, Stage};
use store::SessionStore;

pub struct Conversation {
    cfg: Arc<Config>,
    messenger: Arc<dyn MessagingPort>,
    notifier: AdminNotifier,
    sessions: SessionStore,
}

impl Conversation {
    pub fn new(cfg: Arc<Config>, messenger: Arc<dyn MessagingPort>) -> Self {
        let notifier = AdminNotifier::new(cfg.admin_ids.clone());
        Self {
            cfg,
            messenger,
            notifier,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Route one incoming message and perform its side effects.
    pub async fn handle(&self, msg: IncomingMessage) -> Result<()> {
        let chat_id = msg.chat_id;
        let stage = self.sessions.get(chat_id).await;
        let route = route(&stage, Input::classify(&msg.content));

        tracing::debug!(
            chat = chat_id.0,
            user = msg.from.id.0,
            stage = stage.name(),
            ?route,
            "routing message"
        );

        match route {
            Route::ShowMenu => self.reply_with_menu(chat_id, texts::WELCOME).await,
            Route::GetId => self.reply(chat_id, &texts::get_id(chat_id, &msg.from)).await,
            Route::Status => {
                let is_admin = self.cfg.is_admin(ChatId(msg.from.id.0));
                self.reply(chat_id, &texts::status(&self.cfg, is_admin))
                    .await
            }
            Route::Help => self.reply(chat_id, texts::HELP).await,
            Route::Unrecognized => self.reply_with_menu(chat_id, texts::UNRECOGNIZED).await,

            Route::Begin => {
                self.sessions.set(chat_id, Stage::WaitingForLink).await;
                self.messenger
                    .send_html_with_keyboard(chat_id, texts::ASK_LINK, ReplyKeyboard::Remove)
                    .await
            }

            Route::AcceptLink(text) => {
                let link = text.trim().to_string();
                self.sessions
                    .set(chat_id, Stage::WaitingForScreenshot { link })
                    .await;
                self.reply(chat_id, texts::ASK_SCREENSHOT).await
            }
            Route::RejectLink => self.reply(chat_id, texts::REJECT_LINK).await,

            Route::AcceptScreenshot { link, screenshot } => {
                self.sessions
                    .set(chat_id, Stage::WaitingForWallet { link, screenshot })
                    .await;
                self.reply(chat_id, texts::ASK_WALLET).await
            }
            Route::RejectScreenshot => self.reply(chat_id, texts::REJECT_SCREENSHOT).await,

            Route::SubmitWallet {
                link,
                screenshot,
                wallet,
            } => {
                self.submit(chat_id, msg.from, link, screenshot, wallet.trim())
                    .await
            }
            Route::RejectWallet => self.reply(chat_id, texts::REJECT_WALLET).await,
        }
    }

    async fn submit(
        &self,
        chat_id: ChatId,
        from: Sender,
        link: String,
        screenshot: FileRef,
        wallet: &str,
    ) -> Result<()> {
        if !has_wallet_prefix(wallet) {
            return self.reply(chat_id, texts::REJECT_WALLET).await;
        }

        self.sessions.clear(chat_id).await;
        let request = PayoutRequest {
            from,
            link,
            screenshot,
            wallet: wallet.to_string(),
            submitted_at: Local::now(),
        };

        // Admins get the request even if the confirmation to the user fails.
        let confirmed = self.reply_with_menu(chat_id, texts::SUBMITTED).await;

        if self.notifier.is_configured() {
            let report = self.notifier.deliver(&*self.messenger, &request).await;
            tracing::info!(
                user = request.from.id.0,
                with_photo = report.with_photo,
                text_only = report.text_only,
                unreachable = report.unreachable,
                "payout request delivered"
            );
        } else {
            tracing::warn!(
                user = request.from.id.0,
                "ADMIN_ID is not configured; payout request was not forwarded"
            );
            self.reply_with_menu(chat_id, texts::NO_ADMIN).await?;
        }

        confirmed
    }

    async fn reply(&self, chat_id: ChatId, html: &str) -> Result<()> {
        self.messenger.send_html(chat_id, html).await
    }

    async fn reply_with_menu(&self, chat_id: ChatId, html: &str) -> Result<()> {
        self.messenger
            .send_html_with_keyboard(chat_id, html, ReplyKeyboard::single(texts::MENU_BUTTON))
            .await
    }
}
