//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Registers the command menu before polling; [`fetch_bot_username`] resolves the bot's own username.

use cinebot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Calls `getMe` and returns the bot's username. A failure is logged and yields `None`.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = username.as_deref().unwrap_or_default(), "Bot authenticated");
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed, accepting commands addressed to any bot");
            None
        }
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// `commands` is the `(command, description)` menu registered via `setMyCommands`; a registration
/// failure is logged, not fatal. Each message is converted to core::Message and handled in its own task.
#[instrument(skip(bot, handler_chain, commands))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    commands: &[(&str, &str)],
) -> anyhow::Result<()> {
    let menu: Vec<BotCommand> = commands
        .iter()
        .map(|(command, description)| BotCommand::new(*command, *description))
        .collect();
    if let Err(e) = bot.set_my_commands(menu).await {
        warn!(error = %e, "setMyCommands failed");
    }

    info!("Bot is online, polling for updates");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            // Run handler chain in a spawned task so the REPL returns immediately
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
