use thiserror::Error;

/// Every way a command invocation can fail.
///
/// The `Display` text of each variant is exactly what the invoking member
/// sees in the ephemeral reply, so keep it user-facing.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("This command can only be used in the Juiceworks Discord server.")]
    OutsideGuild,

    #[error("This command can only be used by Juiceworks members.")]
    NotAMember,

    #[error("This command cannot be used in the internal channel.")]
    InternalChannel,

    #[error("This command requires a channel name.")]
    MissingChannelName,

    #[error("Channel name must be between 2 and 100 characters.")]
    ChannelNameLength,

    #[error("This command requires a user.")]
    MissingUser,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Error reading member roles: {0}")]
    ReadMemberRoles(eyre::Report),

    #[error("Error granting Project Creator role: {0}")]
    GrantProjectCreator(eyre::Report),

    #[error("Error creating channel: {0}")]
    CreateChannel(eyre::Report),

    #[error("Error setting channel permissions: {0}")]
    SetPermissions(eyre::Report),

    #[error("Error adding member to channel: {0}")]
    AddToChannel(eyre::Report),
}

impl CommandError {
    /// Whether this is an expected user error (bad caller, bad input)
    /// rather than a failed call to the platform.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::OutsideGuild
                | Self::NotAMember
                | Self::InternalChannel
                | Self::MissingChannelName
                | Self::ChannelNameLength
                | Self::MissingUser
                | Self::UnknownCommand(_)
        )
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
