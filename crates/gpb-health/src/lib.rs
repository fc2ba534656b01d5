//! Liveness responder for the hosting platform.
//!
//! Every path answers `GET` with the same static HTML page. The server runs on
//! its own OS thread and runtime so a busy bot loop cannot starve health checks.

use std::{
    net::{SocketAddr, TcpListener as StdTcpListener},
    thread,
};

use axum::{response::Html, routing::get, Router};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>NFT Payment Bot Status</title>
        <meta charset="UTF-8">
        <style>
            body {
                font-family: Arial, sans-serif;
                margin: 40px;
                background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
                color: white;
                text-align: center;
            }
            .container {
                max-width: 600px;
                margin: 0 auto;
                padding: 20px;
                background: rgba(255,255,255,0.1);
                border-radius: 10px;
            }
            .status {
                padding: 15px;
                background: rgba(0,255,0,0.2);
                border-radius: 5px;
                margin: 20px 0;
            }
            .emoji { font-size: 3em; }
        </style>
    </head>
    <body>
        <div class="container">
            <div class="emoji">🤖</div>
            <h1>NFT Payment Bot</h1>
            <div class="status">✅ The bot is running and accepting requests!</div>
            <p>Version: {version}</p>
            <p>Status: Active</p>
            <p>Last Check: {date}</p>
        </div>
    </body>
</html>"#;

/// The status page as of `now`. `now` is rendered as an HTTP date.
pub fn render_page(now: DateTime<Utc>) -> String {
    PAGE_TEMPLATE
        .replace("{version}", env!("CARGO_PKG_VERSION"))
        .replace("{date}", &now.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

async fn status_page() -> Html<String> {
    Html(render_page(Utc::now()))
}

/// Router answering every path. Non-GET methods get `405`.
pub fn router() -> Router {
    Router::new().fallback_service(get(status_page))
}

/// Serve [`router`] on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "health check server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Bind `0.0.0.0:port`, then run [`serve`] on a dedicated thread with a
/// current-thread runtime. Bind errors are returned to the caller.
pub fn spawn(port: u16) -> std::io::Result<thread::JoinHandle<()>> {
    let listener = StdTcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port)))?;
    listener.set_nonblocking(true)?;

    thread::Builder::new()
        .name("health".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!(error = %e, "failed to build health runtime");
                    return;
                }
            };
            let result = runtime.block_on(async move {
                let listener = TcpListener::from_std(listener)?;
                serve(listener).await
            });
            if let Err(e) = result {
                tracing::error!(port, error = %e, "health check server stopped");
            }
        })
}
