//! Command parsing: the first token of a text message picks the handler.

/// `(command, description)` pairs registered with Telegram's command menu.
pub const COMMAND_MENU: &[(&str, &str)] = &[
    ("start", "Say hello"),
    ("movie", "Get a masterpiece recommendation"),
    ("info", "Search the global database"),
    ("help", "Show commands"),
];

/// A parsed inbound command. Anything unrecognized, including plain chat, is [`Command::Fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Movie,
    /// `/info <name>`; `None` when no name was given.
    Info(Option<String>),
    Help,
    Fallback,
}

impl Command {
    /// Parses message text. The verb is matched case-insensitively and a `@botname` suffix is ignored;
    /// `/info` arguments are re-joined with single spaces.
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let Some(verb) = tokens.next().and_then(|t| t.strip_prefix('/')) else {
            return Command::Fallback;
        };
        let verb = verb.split('@').next().unwrap_or_default().to_ascii_lowercase();

        match verb.as_str() {
            "start" => Command::Start,
            "movie" => Command::Movie,
            "help" => Command::Help,
            "info" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                Command::Info((!name.is_empty()).then_some(name))
            }
            _ => Command::Fallback,
        }
    }

    /// True when the verb carries a `@botname` suffix naming a bot other than `bot_username`.
    /// Group chats deliver every bot's commands to all members; those are not ours to answer.
    /// Without a known username every command is accepted.
    pub fn is_addressed_elsewhere(text: &str, bot_username: Option<&str>) -> bool {
        let (Some(me), Some(verb)) = (bot_username, text.split_whitespace().next()) else {
            return false;
        };
        match verb.strip_prefix('/').and_then(|v| v.split_once('@')) {
            Some((_, mention)) => !mention.eq_ignore_ascii_case(me.trim_start_matches('@')),
            None => false,
        }
    }

    /// Label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Movie => "movie",
            Command::Info(_) => "info",
            Command::Help => "help",
            Command::Fallback => "fallback",
        }
    }
}
