use juiceworks_core::{
    access::authorize,
    errors::{CommandError, CommandResult},
    models::{command::Invocation, guild::GuildConfig, permission::private_channel_grants},
};
use tracing::{error, info};

use super::permissions::apply_permission;
use crate::api::GuildApi;

/// Handle `/make-channel`: create a private project channel visible to the
/// community role only.
///
/// Returns the confirmation text on success.
pub async fn run<A: GuildApi + ?Sized>(
    api: &A,
    config: &GuildConfig,
    invocation: &Invocation,
) -> CommandResult<String> {
    authorize(config, invocation)?;
    let name = invocation.channel_name()?;

    let channel = api.create_text_channel(name.to_string()).await.map_err(|e| {
        error!("Error creating channel {}: {}", name, e);
        CommandError::CreateChannel(e)
    })?;

    for grant in private_channel_grants(config) {
        apply_permission(api, channel.id, grant, CommandError::SetPermissions).await?;
    }

    info!("Created channel: #{} ({})", channel.name, channel.id);
    Ok(format!("Created channel: #{}", channel.name))
}
