use serde::{Deserialize, Serialize};

use crate::errors::{CommandError, CommandResult};
use crate::models::channel::ChannelName;

/// The slash commands the bot supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    MakeChannel,
    AddMember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    String,
    User,
}

/// Shape of the single option each command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

impl CommandKind {
    pub const ALL: [CommandKind; 2] = [CommandKind::MakeChannel, CommandKind::AddMember];

    pub fn name(self) -> &'static str {
        match self {
            Self::MakeChannel => "make-channel",
            Self::AddMember => "add-member",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MakeChannel => "Create a channel for a new project.",
            Self::AddMember => "Add a member to this channel. Use in a channel to add someone.",
        }
    }

    pub fn option(self) -> OptionSchema {
        match self {
            Self::MakeChannel => OptionSchema {
                name: "channel-name",
                description: "What to name the channel",
                kind: OptionKind::String,
                required: true,
            },
            Self::AddMember => OptionSchema {
                name: "user",
                description: "The user to add to the channel",
                kind: OptionKind::User,
                required: true,
            },
        }
    }

    pub fn from_name(name: &str) -> CommandResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
    }
}

/// A resolved option value as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    User(u64),
    Other,
}

/// Snapshot of one slash command invocation.
///
/// Built once per interaction and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Roles of the invoking guild member, `None` outside a guild.
    pub member_roles: Option<Vec<u64>>,
    pub command: String,
    pub options: Vec<OptionValue>,
}

impl Invocation {
    /// The normalized `channel-name` option of `make-channel`.
    pub fn channel_name(&self) -> CommandResult<ChannelName> {
        match self.options.as_slice() {
            [OptionValue::String(raw)] => ChannelName::parse(raw),
            _ => Err(CommandError::MissingChannelName),
        }
    }

    /// The `user` option of `add-member`.
    pub fn target_user(&self) -> CommandResult<u64> {
        match self.options.as_slice() {
            [OptionValue::User(user_id)] => Ok(*user_id),
            _ => Err(CommandError::MissingUser),
        }
    }
}
