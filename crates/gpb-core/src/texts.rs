//! User-facing message texts (Telegram HTML).

use crate::{
    config::Config,
    domain::{ChatId, Sender},
    formatting::{escape_html, handle_or},
};

/// Label of the reply-keyboard button that starts a payout request.
pub const MENU_BUTTON: &str = "💰 Submit payout request";

pub const WELCOME: &str = "👋 Hi! I accept payout requests for NFT gifts.\n\n\
To submit a request, press the button below 👇";

pub const ASK_LINK: &str = "💰 Send the link to your gift:\n\nExample: t.me/nft/...";

pub const REJECT_LINK: &str = "❌ Please send the gift link as a text message.";

pub const ASK_SCREENSHOT: &str = "📸 Great! Now send a screenshot of the gift:";

pub const REJECT_SCREENSHOT: &str = "❌ Please send the screenshot as an image (photo).";

pub const ASK_WALLET: &str =
    "💳 Send the TON wallet address for the payout:\n\nExample: UQ... or EQ...";

pub const REJECT_WALLET: &str =
    "❌ Please send a valid TON wallet address (it starts with UQ or EQ).";

pub const SUBMITTED: &str = "✅ Your payout request has been submitted!\n\n\
Please wait for an administrator to confirm it. This usually takes from a few minutes to a few hours.";

pub const NO_ADMIN: &str =
    "⚠️ Attention! No administrator is configured. Please contact support.";

pub const UNRECOGNIZED: &str = "❓ I don't understand this command.\n\
Use /help to see the list of commands or press the button below.";

pub const SCREENSHOT_UNAVAILABLE: &str = "❌ Could not load the screenshot";

pub const HELP: &str = "🤖 <b>Bot help</b>\n\n\
<b>Available commands:</b>\n\
/start - Start the bot\n\
/getid - Show your Telegram ID\n\
/status - Check bot status\n\
/help - Show this message\n\n\
<b>How to submit a request:</b>\n\
1. Press '💰 Submit payout request'\n\
2. Send the link to the NFT gift\n\
3. Send a screenshot of the gift\n\
4. Send your TON wallet address\n\n\
✅ The request is then forwarded to an administrator";

pub fn get_id(chat_id: ChatId, from: &Sender) -> String {
    format!(
        "🆔 <b>Your ID:</b> <code>{}</code>\n\
         👤 <b>Username:</b> {}\n\
         💬 <b>Chat ID:</b> <code>{}</code>",
        from.id.0,
        handle_or(from.username.as_deref(), "not set"),
        chat_id.0
    )
}

pub fn status(cfg: &Config, caller_is_admin: bool) -> String {
    let mark = |ok: bool| if ok { "✅ Set" } else { "❌ Not set" };
    let mut out = format!(
        "🤖 <b>Bot status:</b>\n\n\
         🔑 Token: {}\n\
         👮 Admin ID: {}\n\n\
         ⚡️ <b>System information:</b>\n\
         • Platform: {}\n\
         • Port: {}\n\
         • Version: {}\n",
        mark(!cfg.bot_token.is_empty()),
        mark(cfg.has_admins()),
        escape_html(cfg.platform.label()),
        cfg.port,
        env!("CARGO_PKG_VERSION"),
    );
    if caller_is_admin {
        out.push_str("\n🔐 <b>Admin mode:</b> active");
    }
    out
}
