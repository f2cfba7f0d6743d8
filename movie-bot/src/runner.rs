//! Startup: liveness thread, OMDb client, Telegram adapter, handler chain, polling loop.

use crate::commands::COMMAND_MENU;
use crate::config::BotConfig;
use crate::handlers::{CommandRouter, LoggingHandler, MovieHandler};
use crate::liveness;
use anyhow::Result;
use cinebot_core::Bot;
use cinebot_telegram::{fetch_bot_username, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use omdb_client::MovieLookup;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument};

/// Logging first, router last. With `bot_username` set, commands addressed to other bots get no reply.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    lookup: Arc<dyn MovieLookup>,
    bot_username: Option<String>,
) -> HandlerChain {
    let movies = MovieHandler::new(bot.clone(), lookup);
    let router = CommandRouter::new(bot, movies).with_bot_username(bot_username);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(router))
}

/// Main entry after config and tracing are set up. Returns only if polling ends.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    info!(config = %config.summary(), "Bot is waking up");

    liveness::spawn(SocketAddr::from(([0, 0, 0, 0], config.port)))?;

    let lookup: Arc<dyn MovieLookup> = Arc::new(config.omdb_client());
    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let username = fetch_bot_username(&teloxide_bot).await;
    let chain = build_handler_chain(bot, lookup, username);

    run_repl(teloxide_bot, chain, COMMAND_MENU).await
}
