//! `/movie` and `/info <name>`: one OMDb lookup each, turned into a photo or text reply.

use crate::curated;
use crate::format::{
    details_caption, info_not_found_message, movie_reply, recommendation_caption, Reply,
    MOVIE_FAILED_MESSAGE,
};
use cinebot_core::{Bot, Chat};
use omdb_client::MovieLookup;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs lookups and builds the reply; does not send it.
#[derive(Clone)]
pub struct MovieHandler {
    bot: Arc<dyn Bot>,
    lookup: Arc<dyn MovieLookup>,
}

impl MovieHandler {
    pub fn new(bot: Arc<dyn Bot>, lookup: Arc<dyn MovieLookup>) -> Self {
        Self { bot, lookup }
    }

    /// Random curated title → recommendation caption, or [`MOVIE_FAILED_MESSAGE`].
    pub async fn recommend(&self, chat: &Chat) -> Reply {
        let title = curated::pick_title(&mut rand::rng());
        info!(chat_id = chat.id, title = %title, "Recommending curated title");
        self.show_typing(chat).await;

        match self.lookup.lookup(title).await {
            Ok(movie) => movie_reply(&movie, recommendation_caption(&movie)),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), title = %title, "Recommendation lookup failed");
                Reply::Text(MOVIE_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// User-supplied title → details caption, or the not-found message naming the title.
    pub async fn info(&self, chat: &Chat, name: &str) -> Reply {
        self.show_typing(chat).await;

        match self.lookup.lookup(name).await {
            Ok(movie) => movie_reply(&movie, details_caption(&movie)),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), title = %name, "Info lookup failed");
                Reply::Text(info_not_found_message(name))
            }
        }
    }

    async fn show_typing(&self, chat: &Chat) {
        if let Err(e) = self.bot.send_typing(chat).await {
            warn!(error = %e, chat_id = chat.id, "Failed to send typing action");
        }
    }
}
