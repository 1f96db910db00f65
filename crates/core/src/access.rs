//! Caller checks shared by every command.

use crate::errors::{CommandError, CommandResult};
use crate::models::{command::Invocation, guild::GuildConfig};

/// Accept the invocation only if it comes from a member of the configured
/// guild who holds the community role.
pub fn authorize(config: &GuildConfig, invocation: &Invocation) -> CommandResult<()> {
    let roles = match (invocation.guild_id, &invocation.member_roles) {
        (Some(guild_id), Some(roles)) if guild_id == config.guild_id => roles,
        _ => return Err(CommandError::OutsideGuild),
    };

    if !roles.contains(&config.member_role_id) {
        return Err(CommandError::NotAMember);
    }

    Ok(())
}

pub fn ensure_outside_internal_channel(
    config: &GuildConfig,
    invocation: &Invocation,
) -> CommandResult<()> {
    if invocation.channel_id == config.internal_channel_id {
        return Err(CommandError::InternalChannel);
    }
    Ok(())
}
