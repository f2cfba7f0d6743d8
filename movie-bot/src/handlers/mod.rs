//! Handlers: message logging, command routing and the OMDb-backed movie commands.

mod logging;
mod movie;
mod router;

pub use logging::LoggingHandler;
pub use movie::MovieHandler;
pub use router::CommandRouter;

use crate::format::Reply;
use cinebot_core::{Bot, Chat, Result};
use tracing::warn;

/// Sends one reply. A photo the transport cannot deliver (e.g. Telegram fails to fetch the poster)
/// is sent as its Markdown caption instead, and a caption Telegram refuses to parse is sent as plain
/// text, so the user still gets exactly one message.
pub(crate) async fn deliver(bot: &dyn Bot, chat: &Chat, reply: &Reply) -> Result<()> {
    match reply {
        Reply::Text(text) => bot.send_message(chat, text).await,
        Reply::Markdown(text) => send_markdown_or_plain(bot, chat, text).await,
        Reply::Photo { url, caption } => match bot.send_photo(chat, url, caption).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, chat_id = chat.id, poster = %url, "Photo send failed, sending caption as text");
                send_markdown_or_plain(bot, chat, caption).await
            }
        },
    }
}

async fn send_markdown_or_plain(bot: &dyn Bot, chat: &Chat, text: &str) -> Result<()> {
    match bot.send_markdown(chat, text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(error = %e, chat_id = chat.id, "Markdown send failed, sending plain text");
            bot.send_message(chat, text).await
        }
    }
}
