//! # movie-bot
//!
//! Wires the Telegram transport, the handler chain and the OMDb client into the movie bot.
//! Loads config from env, starts the liveness server on its own thread and runs the polling loop.

pub mod commands;
pub mod config;
pub mod curated;
pub mod format;
pub mod handlers;
pub mod liveness;
pub mod runner;

pub use commands::{Command, COMMAND_MENU};
pub use config::BotConfig;
pub use format::Reply;
pub use handlers::{CommandRouter, LoggingHandler, MovieHandler};
pub use runner::{build_handler_chain, run_bot};
