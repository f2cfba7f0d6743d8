//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; cinebot-telegram implements it over teloxide and tests use a recording mock.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound side of the transport. Every call targets one chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends plain text (no markup parsing).
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends text rendered with Telegram legacy Markdown.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a photo fetched by the transport from `photo_url`, with a Markdown caption.
    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()>;
    /// Shows a "typing" indicator in the chat. Not a message.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
