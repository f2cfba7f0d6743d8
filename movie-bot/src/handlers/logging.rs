//! Logs each message in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use cinebot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        match message.content.as_deref() {
            Some(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %message.user.username.as_deref().unwrap_or("unknown"),
                message_content = %text,
                "Received message"
            ),
            None => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Received non-text message"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let (response_type, reply_len) = match response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Ignore => ("Ignore", None),
            HandlerResponse::Reply(s) => ("Reply", Some(s.chars().count())),
        };
        info!(
            user_id = message.user.id,
            message_id = %message.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            "Processed message"
        );
        Ok(())
    }
}
