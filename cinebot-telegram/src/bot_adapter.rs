//! Wraps teloxide::Bot and implements [`cinebot_core::Bot`]. Production code sends messages via Telegram; tests substitute a recording Bot.

use async_trait::async_trait;
use cinebot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::payloads::setters::*;
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, InputFile, ParseMode},
};

/// Captions and replies use Telegram's legacy Markdown (`*bold*`), which teloxide marks deprecated.
#[allow(deprecated)]
const LEGACY_MARKDOWN: ParseMode = ParseMode::Markdown;

/// Thin wrapper around teloxide::Bot that implements cinebot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .parse_mode(LEGACY_MARKDOWN)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| BotError::InvalidPhotoUrl(format!("{}: {}", photo_url, e)))?;
        self.bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .caption(caption)
            .parse_mode(LEGACY_MARKDOWN)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
