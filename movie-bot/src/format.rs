//! Reply texts and caption formatting.
//!
//! Captions use Telegram legacy Markdown: only the title line is bold, every interpolated value is
//! escaped so API data cannot open a stray entity.

use omdb_client::{Movie, NOT_AVAILABLE};

pub const START_MESSAGE: &str =
    "Hi Epha 👋\nI am now connected to the global movie database! 🌍\nType /movie or /info <name>.";

pub const HELP_MESSAGE: &str = "/movie - Get a masterpiece recommendation\n/info <name> - Search the global database\n/help - Show commands";

pub const FALLBACK_MESSAGE: &str = "Hmm, I don't understand normal chat yet! 🤔\nPlease use my commands. Type /help to see what I can do.";

pub const INFO_USAGE_MESSAGE: &str = "Please give me a movie name! Example: /info Titanic";

pub const MOVIE_FAILED_MESSAGE: &str = "Oops! My database hiccuped. Try /movie again!";

/// `/info` failure text; `name` is what the user typed.
pub fn info_not_found_message(name: &str) -> String {
    format!("Sorry, I couldn't find '{}' on the global database! 😔", name)
}

/// One outbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text, no markup.
    Text(String),
    /// Text rendered as Markdown.
    Markdown(String),
    /// Photo fetched from `url` with a Markdown caption.
    Photo { url: String, caption: String },
}

impl Reply {
    /// The text the user reads (caption for photos).
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) | Reply::Markdown(text) => text,
            Reply::Photo { caption, .. } => caption,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Text(_) => "text",
            Reply::Markdown(_) => "markdown",
            Reply::Photo { .. } => "photo",
        }
    }
}

/// Escapes the characters legacy Markdown treats as entity delimiters.
pub fn escape_markdown(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Bold entity. Escapes are not allowed inside entities, so the bold run is closed around each `*`,
/// which is written escaped between runs: `M*A` becomes `*M*\**A*`.
fn bold(value: &str) -> String {
    value
        .split('*')
        .map(|run| if run.is_empty() { String::new() } else { format!("*{}*", run) })
        .collect::<Vec<_>>()
        .join("\\*")
}

fn title_line(movie: &Movie) -> String {
    format!("⭐ {}", bold(&format!("{} ({})", movie.title, movie.year)))
}

/// Caption for a `/movie` recommendation.
pub fn recommendation_caption(movie: &Movie) -> String {
    format!(
        "🔥 *TOP TIER RECOMMENDATION* 🔥\n\n{}\n📈 IMDb Rating: {} / 10\n🎭 Genre: {}\n📖 Plot: {}",
        title_line(movie),
        escape_markdown(&movie.imdb_rating),
        escape_markdown(&movie.genre),
        escape_markdown(&movie.plot),
    )
}

/// Caption for an `/info` lookup; includes the director.
pub fn details_caption(movie: &Movie) -> String {
    format!(
        "{}\n🎬 Director: {}\n📈 Rating: {}\n🎭 Genre: {}\n📖 Plot: {}",
        title_line(movie),
        escape_markdown(&movie.director),
        escape_markdown(&movie.imdb_rating),
        escape_markdown(&movie.genre),
        escape_markdown(&movie.plot),
    )
}

/// Poster URL worth sending: present, non-blank and not the `N/A` placeholder.
pub fn poster_url(movie: &Movie) -> Option<&str> {
    movie
        .poster
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty() && *url != NOT_AVAILABLE)
}

/// Photo reply when the movie has a usable poster, Markdown text otherwise. Same caption either way.
pub fn movie_reply(movie: &Movie, caption: String) -> Reply {
    match poster_url(movie) {
        Some(url) => Reply::Photo {
            url: url.to_string(),
            caption,
        },
        None => Reply::Markdown(caption),
    }
}
