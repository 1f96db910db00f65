use eyre::{Result, WrapErr};
use juiceworks_core::models::command::{CommandKind, OptionKind};
use serenity::{
    builder::CreateApplicationCommand,
    http::Http,
    model::{
        application::command::{Command, CommandOptionType},
        id::GuildId,
    },
};
use tracing::info;

/// Fill `command` with the name, description and option of `kind`.
pub fn build_command(
    command: &mut CreateApplicationCommand,
    kind: CommandKind,
) -> &mut CreateApplicationCommand {
    let schema = kind.option();
    let option_type = match schema.kind {
        OptionKind::String => CommandOptionType::String,
        OptionKind::User => CommandOptionType::User,
    };

    command
        .name(kind.name())
        .description(kind.description())
        .dm_permission(false)
        .create_option(|option| {
            option
                .name(schema.name)
                .description(schema.description)
                .kind(option_type)
                .required(schema.required)
        })
}

/// Register every command in the guild.
///
/// Returns the created commands so they can be removed again on shutdown.
pub async fn register_guild_commands(http: &Http, guild_id: u64) -> Result<Vec<Command>> {
    let guild_id = GuildId(guild_id);
    let mut registered = Vec::with_capacity(CommandKind::ALL.len());

    for kind in CommandKind::ALL {
        let command = guild_id
            .create_application_command(http, |command| build_command(command, kind))
            .await
            .wrap_err_with(|| format!("Cannot create '{}' command", kind.name()))?;

        info!("Command registered: /{} - {}", command.name, command.description);
        registered.push(command);
    }

    Ok(registered)
}

/// Remove commands previously created by [`register_guild_commands`].
pub async fn deregister_guild_commands(http: &Http, guild_id: u64, commands: &[Command]) -> Result<()> {
    let guild_id = GuildId(guild_id);

    for command in commands {
        guild_id
            .delete_application_command(http, command.id)
            .await
            .wrap_err_with(|| format!("Cannot delete '{}' command", command.name))?;

        info!("Command removed: /{}", command.name);
    }

    Ok(())
}
