use serde::{Deserialize, Serialize};

use crate::models::guild::GuildConfig;

/// Platform permission bits used by the bot.
pub const VIEW_CHANNEL: u64 = 1 << 10;
pub const SEND_MESSAGES: u64 = 1 << 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionSubject {
    Role(u64),
    Member(u64),
}

/// One channel permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub subject: PermissionSubject,
    pub allow: u64,
    pub deny: u64,
}

impl PermissionGrant {
    pub fn view_and_send(subject: PermissionSubject) -> Self {
        Self {
            subject,
            allow: VIEW_CHANNEL | SEND_MESSAGES,
            deny: 0,
        }
    }

    pub fn deny_view(subject: PermissionSubject) -> Self {
        Self {
            subject,
            allow: 0,
            deny: VIEW_CHANNEL,
        }
    }
}

/// Overwrites for a new project channel, in the order they must be applied:
/// open it to the community role, then hide it from `@everyone`.
pub fn private_channel_grants(config: &GuildConfig) -> [PermissionGrant; 2] {
    [
        PermissionGrant::view_and_send(PermissionSubject::Role(config.member_role_id)),
        PermissionGrant::deny_view(PermissionSubject::Role(config.everyone_role_id())),
    ]
}
