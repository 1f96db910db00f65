use eyre::Result;
use serenity::{http::Http, prelude::GatewayIntents, Client};
use tracing::{error, info};

pub mod api;
pub mod commands;
pub mod config;
pub mod handlers;

/// Run the bot until the process receives SIGINT or SIGTERM.
///
/// Commands are registered in the guild once the client is built and are
/// removed again after the gateway shuts down. Any failure before the bot
/// is running is returned to the caller.
pub async fn start_bot(config: config::BotConfig) -> Result<()> {
    info!("Starting Discord bot");

    let handler = handlers::Handler::new(config.guild);

    // Guild commands need the application id before the gateway is up.
    let application_id = match config.application_id {
        Some(id) => id,
        None => Http::new(&config.token).get_current_application_info().await?.id.0,
    };

    let mut client = Client::builder(&config.token, GatewayIntents::non_privileged())
        .event_handler(handler)
        .application_id(application_id)
        .await?;

    let http = client.cache_and_http.http.clone();
    let registered = commands::register_guild_commands(&http, config.guild.guild_id).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            error!("Error listening for shutdown signal: {}", e);
        }
        info!("Shutting down...");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Bot is running. Press CTRL-C to exit.");
    let run = client.start().await;

    let deregistered =
        commands::deregister_guild_commands(&http, config.guild.guild_id, &registered).await;
    shutdown_outcome(run, deregistered)?;

    info!("Discord bot shut down gracefully");
    Ok(())
}

/// Merge the gateway result with command cleanup.
///
/// A gateway error is returned in preference; a cleanup failure is always
/// logged so neither is lost.
pub fn shutdown_outcome<E>(run: std::result::Result<(), E>, deregistered: Result<()>) -> Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    if let Err(e) = &deregistered {
        error!("Error removing guild commands: {:?}", e);
    }
    run?;
    deregistered
}

#[cfg(unix)]
async fn wait_for_shutdown() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
