use juiceworks_core::{
    errors::{CommandError, CommandResult},
    models::{
        command::{CommandKind, Invocation, OptionValue},
        guild::GuildConfig,
    },
};
use serenity::{
    async_trait,
    model::{
        application::interaction::{
            application_command::{ApplicationCommandInteraction, CommandDataOptionValue},
            Interaction, InteractionResponseType,
        },
        gateway::Ready,
    },
    prelude::*,
};
use tracing::{error, info, warn};

use crate::api::{GuildApi, SerenityGuildApi};

pub mod add_member;
pub mod make_channel;
pub mod permissions;

/// Route an invocation to the handler for its command.
pub async fn dispatch<A: GuildApi + ?Sized>(
    api: &A,
    config: &GuildConfig,
    invocation: &Invocation,
) -> CommandResult<String> {
    match CommandKind::from_name(&invocation.command)? {
        CommandKind::MakeChannel => make_channel::run(api, config, invocation).await,
        CommandKind::AddMember => add_member::run(api, config, invocation).await,
    }
}

/// Snapshot the parts of an application command interaction the handlers
/// look at.
pub fn to_invocation(command: &ApplicationCommandInteraction) -> Invocation {
    let options = command
        .data
        .options
        .iter()
        .map(|option| match &option.resolved {
            Some(CommandDataOptionValue::String(value)) => OptionValue::String(value.clone()),
            Some(CommandDataOptionValue::User(user, _)) => OptionValue::User(user.id.0),
            _ => OptionValue::Other,
        })
        .collect();

    Invocation {
        guild_id: command.guild_id.map(|id| id.0),
        channel_id: command.channel_id.0,
        member_roles: command
            .member
            .as_ref()
            .map(|member| member.roles.iter().map(|role| role.0).collect()),
        command: command.data.name.clone(),
        options,
    }
}

/// Main Discord handler.
///
/// Holds only immutable configuration, so interactions can be served
/// concurrently without coordination.
pub struct Handler {
    config: GuildConfig,
}

impl Handler {
    pub fn new(config: GuildConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as: {}", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        info!(
            "Received command /{} from {} in channel {}",
            command.data.name, command.user.id, command.channel_id
        );

        let api = SerenityGuildApi::new(ctx.http.clone(), self.config.guild_id);
        let invocation = to_invocation(&command);

        let result = dispatch(&api, &self.config, &invocation).await;
        if let Some(content) = reply_content(&invocation, result) {
            respond_ephemeral(&ctx, &command, content).await;
        }
    }
}

/// The text to send back for a dispatch result, or `None` when the
/// interaction is not ours to answer.
pub fn reply_content(invocation: &Invocation, result: CommandResult<String>) -> Option<String> {
    match result {
        Ok(message) => Some(message),
        Err(CommandError::UnknownCommand(name)) => {
            warn!("Ignoring unknown command /{}", name);
            None
        }
        Err(e) if e.is_rejection() => {
            info!("Rejected /{} in channel {}: {}", invocation.command, invocation.channel_id, e);
            Some(e.to_string())
        }
        Err(e) => Some(e.to_string()),
    }
}

/// Send the one reply an interaction gets. Delivery failures are only logged.
async fn respond_ephemeral(ctx: &Context, command: &ApplicationCommandInteraction, content: String) {
    if let Err(why) = command
        .create_interaction_response(&ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| m.content(content).ephemeral(true))
        })
        .await
    {
        error!("Error responding to interaction: {:?}", why);
    }
}
