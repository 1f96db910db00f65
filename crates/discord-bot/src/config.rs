use eyre::{eyre, Result};
use juiceworks_core::models::guild::GuildConfig;
use std::env;

/// Configuration for the Discord bot.
///
/// Only the token comes from the environment; guild, channel and role ids
/// are fixed for the Juiceworks server.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// Application ID, fetched from Discord when not set
    pub application_id: Option<u64>,
    pub guild: GuildConfig,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let token = env::var("DISCORD_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| eyre!("Could not find DISCORD_TOKEN in .env file or environment"))?;

        let application_id = match env::var("DISCORD_APPLICATION_ID") {
            Ok(id) => Some(
                id.parse::<u64>()
                    .map_err(|_| eyre!("DISCORD_APPLICATION_ID must be a valid u64"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            token,
            application_id,
            guild: GuildConfig::juiceworks(),
        })
    }
}
