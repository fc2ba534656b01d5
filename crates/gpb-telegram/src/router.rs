use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use gpb_core::{config::Config, conversation::Conversation, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<Conversation>,
}

/// Long-poll Telegram until Ctrl-C.
///
/// The dispatcher handles updates of one chat sequentially, which is what the
/// conversation's session store relies on.
pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    let me = bot.get_me().await?;
    tracing::info!(username = %me.username(), "bot started");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let conversation = Arc::new(Conversation::new(cfg, messenger));

    let state = Arc::new(AppState { conversation });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
