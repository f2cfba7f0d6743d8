//! Bot configuration: Telegram connection, OMDb credentials, liveness port, log file. Loaded from env.

use anyhow::{bail, Context, Result};
use cinebot_telegram::TelegramConfig;
use omdb_client::{mask_token, OmdbClient, OMDB_API_BASE};
use std::env;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_LOG_FILE: &str = "logs/cinebot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL)
    pub telegram: TelegramConfig,
    /// OMDB_API_KEY
    pub omdb_api_key: String,
    /// OMDB_BASE_URL; defaults to the public endpoint
    pub omdb_base_url: String,
    /// PORT for the liveness server
    pub port: u16,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. Missing secrets or an unparsable PORT are errors.
    pub fn load() -> Result<Self> {
        let telegram = TelegramConfig::from_env()?;
        let omdb_api_key = env::var("OMDB_API_KEY").context("OMDB_API_KEY not set")?;
        let omdb_base_url =
            env::var("OMDB_BASE_URL").unwrap_or_else(|_| OMDB_API_BASE.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            omdb_api_key,
            omdb_base_url,
            port,
            log_file,
        })
    }

    /// Rejects blank secrets.
    pub fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            bail!("TELEGRAM_TOKEN is empty");
        }
        if self.omdb_api_key.trim().is_empty() {
            bail!("OMDB_API_KEY is empty");
        }
        Ok(())
    }

    pub fn omdb_client(&self) -> OmdbClient {
        OmdbClient::new(self.omdb_api_key.clone()).with_base_url(self.omdb_base_url.clone())
    }

    /// One-line summary with secrets masked, for the startup log.
    pub fn summary(&self) -> String {
        format!(
            "bot_token={} omdb_api_key={} omdb_base_url={} port={} log_file={}",
            mask_token(&self.telegram.bot_token),
            mask_token(&self.omdb_api_key),
            self.omdb_base_url,
            self.port,
            self.log_file
        )
    }
}
