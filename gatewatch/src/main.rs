use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use teloxide::prelude::*;
use tracing::info;

use gatewatch::commands::Command;
use gatewatch::handlers::{self, AppState};
use gatewatch_core::dispatch::UrlChecker;
use gatewatch_core::limiter::{DEFAULT_REQUEST_INTERVAL, RateLimiter};
use gatewatch_core::print_banner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    print_banner();

    let token = prompt_token().context("Failed to read bot token")?;
    let bot = Bot::new(token);

    let state = Arc::new(AppState {
        checker: UrlChecker::new().context("Failed to build HTTP client")?,
        limiter: RateLimiter::new(DEFAULT_REQUEST_INTERVAL),
    });

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.document().is_some())
                .endpoint(handlers::handle_document),
        );

    info!("Starting update dispatcher");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn prompt_token() -> io::Result<String> {
    print!("Enter your bot token: ");
    io::stdout().flush()?;

    let mut token = String::new();
    io::stdin().read_line(&mut token)?;
    Ok(token.trim().to_string())
}
