use std::sync::Arc;
use std::time::Duration;

use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};
use url::Url;

use gatewatch_core::dispatch::{CheckOutcome, UrlChecker};
use gatewatch_core::limiter::RateLimiter;
use gatewatch_core::report::{LOADING_MESSAGE, render_report};

use crate::commands::Command;

pub const USAGE_MESSAGE: &str = "Please provide a valid URL after the /url command";
pub const RATE_LIMIT_MESSAGE: &str = "Please wait a few seconds before making another request";

/// Cosmetic pause before a placeholder message is replaced in place.
const RESPONSE_DELAY: Duration = Duration::from_secs(1);

/// Shared bot state injected into every handler.
pub struct AppState {
    pub checker: UrlChecker,
    pub limiter: RateLimiter,
}

/// Extract the URL argument from a command's trailing text. Only the
/// first whitespace-separated token is considered.
pub fn parse_url_argument(arg: &str) -> Option<String> {
    let token = arg.split_whitespace().next()?;
    parse_url_line(token)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    warn!("Skipping invalid URL '{}'", line);
    None
}

/// Decode an uploaded document as newline-delimited URLs. Lines are
/// trimmed; empty and unparseable lines are skipped.
pub fn decode_url_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_url_line)
        .collect()
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Url(arg) => handle_url_command(bot, msg, arg, state).await?,
    }
    Ok(())
}

/// The single-URL path: rate-limit first, classify, then send a
/// placeholder and edit it in place with the rendered report.
async fn handle_url_command(
    bot: Bot,
    msg: Message,
    arg: String,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let Some(url) = parse_url_argument(&arg) else {
        bot.send_message(msg.chat.id, USAGE_MESSAGE)
            .reply_to_message_id(msg.id)
            .await?;
        return Ok(());
    };

    match state.checker.check_allowed(&state.limiter, user.id.0, &url).await {
        CheckOutcome::RateLimited => {
            bot.send_message(msg.chat.id, RATE_LIMIT_MESSAGE)
                .reply_to_message_id(msg.id)
                .await?;
        }
        CheckOutcome::Checked(report) => {
            let loading = bot
                .send_message(msg.chat.id, LOADING_MESSAGE)
                .parse_mode(ParseMode::Html)
                .reply_to_message_id(msg.id)
                .await?;

            tokio::time::sleep(RESPONSE_DELAY).await;

            bot.edit_message_text(msg.chat.id, loading.id, render_report(&report))
                .parse_mode(ParseMode::Html)
                .await?;
        }
    }

    Ok(())
}

/// The batch path: an uploaded document is a newline-delimited URL list.
/// The rate-limit check repeats per line against the same per-requester
/// state; rejected lines are skipped without a reply.
pub async fn handle_document(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(document) = msg.document() else {
        return Ok(());
    };

    info!(
        "Received URL list '{}' from {}",
        document.file_name.as_deref().unwrap_or("unnamed"),
        user.id
    );

    let file = bot.get_file(document.file.id.clone()).await?;
    let mut bytes: Vec<u8> = Vec::new();
    if let Err(e) = bot.download_file(&file.path, &mut bytes).await {
        warn!("Failed to download document: {}", e);
        return Ok(());
    }

    for url in decode_url_lines(&bytes) {
        match state.checker.check_allowed(&state.limiter, user.id.0, &url).await {
            CheckOutcome::RateLimited => {
                warn!("Skipping {} for {}: rate limited", url, user.id);
            }
            CheckOutcome::Checked(report) => {
                let loading = bot
                    .send_message(msg.chat.id, format!("Checking URL: <code>{}</code>", url))
                    .parse_mode(ParseMode::Html)
                    .reply_to_message_id(msg.id)
                    .await?;

                tokio::time::sleep(RESPONSE_DELAY).await;

                bot.edit_message_text(msg.chat.id, loading.id, render_report(&report))
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
        }
    }

    Ok(())
}
