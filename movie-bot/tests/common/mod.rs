//! Shared test doubles: a recording [`MockBot`], a scripted [`StubLookup`], and message builders.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use cinebot_core::{Bot, BotError, Chat, Message, Result, User};
use omdb_client::{LookupError, Movie, MovieLookup};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Markdown(String),
    Photo { url: String, caption: String },
    Typing,
}

impl Sent {
    pub fn is_message(&self) -> bool {
        !matches!(self, Sent::Typing)
    }
}

/// Bot that records every call. With `fail_photos` / `fail_markdown`, those sends error without recording.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_photos: bool,
    fail_markdown: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_photos() -> Self {
        Self {
            fail_photos: true,
            ..Self::default()
        }
    }

    /// Rejects both photos and Markdown, as Telegram does for an unparsable caption.
    pub fn failing_rich_text() -> Self {
        Self {
            fail_photos: true,
            fail_markdown: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Recorded calls that produce a visible message (everything but typing).
    pub fn messages(&self) -> Vec<Sent> {
        self.sent().into_iter().filter(Sent::is_message).collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_markdown(&self, _chat: &Chat, text: &str) -> Result<()> {
        if self.fail_markdown {
            return Err(BotError::Bot("can't parse entities".to_string()));
        }
        self.record(Sent::Markdown(text.to_string()));
        Ok(())
    }

    async fn send_photo(&self, _chat: &Chat, photo_url: &str, caption: &str) -> Result<()> {
        if self.fail_photos {
            return Err(BotError::Bot("wrong file identifier/HTTP URL specified".to_string()));
        }
        self.record(Sent::Photo {
            url: photo_url.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        self.record(Sent::Typing);
        Ok(())
    }
}

/// Lookup that answers every title with the same movie (or no match) and records requested titles.
pub struct StubLookup {
    movie: Option<Movie>,
    requested: Mutex<Vec<String>>,
}

impl StubLookup {
    pub fn found(movie: Movie) -> Self {
        Self {
            movie: Some(movie),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            movie: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieLookup for StubLookup {
    async fn lookup(&self, title: &str) -> std::result::Result<Movie, LookupError> {
        self.requested.lock().unwrap().push(title.to_string());
        match &self.movie {
            Some(movie) => Ok(movie.clone()),
            None => Err(LookupError::NoMatch {
                title: title.to_string(),
                reason: "Movie not found!".to_string(),
            }),
        }
    }
}

pub fn titanic() -> Movie {
    Movie {
        title: "Titanic".to_string(),
        year: "1997".to_string(),
        imdb_rating: "7.9".to_string(),
        genre: "Drama, Romance".to_string(),
        plot: "A seventeen-year-old aristocrat falls in love with a kind but poor artist.".to_string(),
        director: "James Cameron".to_string(),
        poster: Some("http://example/poster.jpg".to_string()),
    }
}

pub fn text_message(text: &str) -> Message {
    Message {
        content: Some(text.to_string()),
        ..non_text_message()
    }
}

pub fn non_text_message() -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 1001,
            username: Some("epha".to_string()),
            first_name: Some("Epha".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1001,
            chat_type: "Private".to_string(),
        },
        content: None,
        created_at: Utc::now(),
    }
}
