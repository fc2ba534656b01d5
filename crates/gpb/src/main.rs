use std::sync::Arc;

use gpb_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), gpb_core::Error> {
    gpb_core::logging::init("gpb")?;

    let cfg = Arc::new(Config::load().inspect_err(|e| tracing::error!("fatal: {e}"))?);

    tracing::info!("NFT gift payout bot");
    tracing::info!("token: loaded");
    if cfg.has_admins() {
        let admins: Vec<i64> = cfg.admin_ids.iter().map(|c| c.0).collect();
        tracing::info!(?admins, "admin chats");
    } else {
        tracing::warn!("ADMIN_ID is not set; requests will not be forwarded");
    }
    tracing::info!(platform = cfg.platform.label(), port = cfg.port, "runtime");

    // Binds before returning; the thread itself is detached.
    gpb_health::spawn(cfg.port)?;

    gpb_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| {
            tracing::error!("fatal: {e}");
            gpb_core::Error::External(format!("telegram bot failed: {e}"))
        })?;

    tracing::info!("bot stopped");
    Ok(())
}
