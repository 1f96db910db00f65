use juiceworks_core::{
    access::{authorize, ensure_outside_internal_channel},
    errors::{CommandError, CommandResult},
    models::{
        command::Invocation,
        guild::GuildConfig,
        permission::{PermissionGrant, PermissionSubject},
    },
};
use serenity::{model::id::UserId, prelude::Mentionable};
use tracing::{error, info};

use super::permissions::apply_permission;
use crate::api::GuildApi;

/// Handle `/add-member`: give a user access to the channel the command was
/// run in.
///
/// Users without the service-provider role are also granted the
/// project-creator role first.
pub async fn run<A: GuildApi + ?Sized>(
    api: &A,
    config: &GuildConfig,
    invocation: &Invocation,
) -> CommandResult<String> {
    authorize(config, invocation)?;
    ensure_outside_internal_channel(config, invocation)?;
    let user_id = invocation.target_user()?;

    let roles = api.member_roles(user_id).await.map_err(|e| {
        error!("Error reading member roles for {}: {}", user_id, e);
        CommandError::ReadMemberRoles(e)
    })?;

    let is_service_provider = roles.contains(&config.service_provider_role_id);
    if !is_service_provider {
        api.grant_role(user_id, config.project_creator_role_id)
            .await
            .map_err(|e| {
                error!("Error granting Project Creator role to {}: {}", user_id, e);
                CommandError::GrantProjectCreator(e)
            })?;
    }

    apply_permission(
        api,
        invocation.channel_id,
        PermissionGrant::view_and_send(PermissionSubject::Member(user_id)),
        CommandError::AddToChannel,
    )
    .await?;

    let mention = UserId(user_id).mention();
    info!(
        "Added {} to channel {} (service provider: {})",
        mention, invocation.channel_id, is_service_provider
    );
    Ok(format!("Added {} to the channel.", mention))
}
