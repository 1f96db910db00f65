use color_eyre::eyre::Result;
use dotenv::dotenv;
use juiceworks_discord_bot::config::BotConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Juiceworks Discord bot");

    // A real environment variable wins over the .env file
    dotenv().ok();

    let config = BotConfig::from_env()?;

    // Startup failures propagate and end the process with a report
    juiceworks_discord_bot::start_bot(config).await
}
