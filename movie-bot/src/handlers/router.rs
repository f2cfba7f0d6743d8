//! Command router: parses the message, builds exactly one reply and sends it.

use super::{deliver, MovieHandler};
use crate::commands::Command;
use crate::format::{Reply, FALLBACK_MESSAGE, HELP_MESSAGE, INFO_USAGE_MESSAGE, START_MESSAGE};
use async_trait::async_trait;
use cinebot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Terminal handler of the chain. Non-text messages and commands addressed to other bots are ignored;
/// everything else gets one reply.
pub struct CommandRouter {
    bot: Arc<dyn Bot>,
    movies: MovieHandler,
    bot_username: Option<String>,
}

impl CommandRouter {
    pub fn new(bot: Arc<dyn Bot>, movies: MovieHandler) -> Self {
        Self {
            bot,
            movies,
            bot_username: None,
        }
    }

    /// Username reported by `getMe`; enables skipping `/cmd@otherbot`.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    async fn reply_for(&self, message: &Message, command: Command) -> Reply {
        match command {
            Command::Start => Reply::Text(START_MESSAGE.to_string()),
            Command::Help => Reply::Text(HELP_MESSAGE.to_string()),
            Command::Fallback => Reply::Text(FALLBACK_MESSAGE.to_string()),
            Command::Info(None) => Reply::Text(INFO_USAGE_MESSAGE.to_string()),
            Command::Info(Some(name)) => self.movies.info(&message.chat, &name).await,
            Command::Movie => self.movies.recommend(&message.chat).await,
        }
    }
}

#[async_trait]
impl Handler for CommandRouter {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.content.as_deref() else {
            debug!(message_id = %message.id, "Ignoring non-text message");
            return Ok(HandlerResponse::Ignore);
        };

        if Command::is_addressed_elsewhere(text, self.bot_username.as_deref()) {
            debug!(message_id = %message.id, "Ignoring command addressed to another bot");
            return Ok(HandlerResponse::Ignore);
        }

        let command = Command::parse(text);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = command.name(),
            "Dispatching command"
        );

        let reply = self.reply_for(message, command).await;
        deliver(self.bot.as_ref(), &message.chat, &reply).await?;
        info!(chat_id = message.chat.id, reply_kind = reply.kind(), "Reply sent");

        Ok(HandlerResponse::Reply(reply.text().to_string()))
    }
}
