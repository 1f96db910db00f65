use std::error::Error;

use juiceworks_core::errors::{CommandError, CommandResult};
use pretty_assertions::assert_eq;

#[test]
fn test_rejection_messages() {
    assert_eq!(
        CommandError::OutsideGuild.to_string(),
        "This command can only be used in the Juiceworks Discord server."
    );
    assert_eq!(
        CommandError::NotAMember.to_string(),
        "This command can only be used by Juiceworks members."
    );
    assert_eq!(
        CommandError::InternalChannel.to_string(),
        "This command cannot be used in the internal channel."
    );
    assert_eq!(
        CommandError::MissingChannelName.to_string(),
        "This command requires a channel name."
    );
    assert_eq!(
        CommandError::ChannelNameLength.to_string(),
        "Channel name must be between 2 and 100 characters."
    );
    assert_eq!(
        CommandError::MissingUser.to_string(),
        "This command requires a user."
    );
}

#[test]
fn test_external_failures_carry_raw_error_text() {
    let read = CommandError::ReadMemberRoles(eyre::eyre!("Unknown Member"));
    let grant = CommandError::GrantProjectCreator(eyre::eyre!("Missing Permissions"));
    let create = CommandError::CreateChannel(eyre::eyre!("Invalid Form Body"));
    let set = CommandError::SetPermissions(eyre::eyre!("Missing Access"));
    let add = CommandError::AddToChannel(eyre::eyre!("Missing Access"));

    assert_eq!(read.to_string(), "Error reading member roles: Unknown Member");
    assert_eq!(
        grant.to_string(),
        "Error granting Project Creator role: Missing Permissions"
    );
    assert_eq!(create.to_string(), "Error creating channel: Invalid Form Body");
    assert_eq!(set.to_string(), "Error setting channel permissions: Missing Access");
    assert_eq!(add.to_string(), "Error adding member to channel: Missing Access");
}

#[test]
fn test_is_rejection() {
    assert!(CommandError::OutsideGuild.is_rejection());
    assert!(CommandError::NotAMember.is_rejection());
    assert!(CommandError::InternalChannel.is_rejection());
    assert!(CommandError::ChannelNameLength.is_rejection());
    assert!(CommandError::UnknownCommand("ping".to_string()).is_rejection());

    assert!(!CommandError::CreateChannel(eyre::eyre!("boom")).is_rejection());
    assert!(!CommandError::SetPermissions(eyre::eyre!("boom")).is_rejection());
}

#[test]
fn test_rejections_have_no_source() {
    assert!(CommandError::NotAMember.source().is_none());
}

#[test]
fn test_command_result() {
    let result: CommandResult<u64> = Err(CommandError::MissingUser);
    assert!(matches!(result, Err(CommandError::MissingUser)));
}
