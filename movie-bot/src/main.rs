//! Binary for the movie bot. Takes no arguments; everything comes from the environment (or `.env`).

use anyhow::Result;
use cinebot_core::init_tracing;
use movie_bot::{run_bot, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::load()?;
    config.validate()?;
    init_tracing(&config.log_file)?;

    run_bot(config).await
}
