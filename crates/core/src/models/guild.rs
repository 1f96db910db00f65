use serde::{Deserialize, Serialize};

/// Fixed identifiers of the Juiceworks guild.
///
/// These are never looked up at runtime; every check compares against them
/// by exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildConfig {
    pub guild_id: u64,
    /// Shared staff channel where `add-member` is refused.
    pub internal_channel_id: u64,
    /// Community membership role required to run any command.
    pub member_role_id: u64,
    pub project_creator_role_id: u64,
    pub service_provider_role_id: u64,
}

impl GuildConfig {
    pub const fn juiceworks() -> Self {
        Self {
            guild_id: 1256628364987600977,
            internal_channel_id: 1256628365771669556,
            member_role_id: 1257752490372370503,
            project_creator_role_id: 1259262543034060830,
            service_provider_role_id: 1260738526425780264,
        }
    }

    /// The `@everyone` role always shares its guild's id.
    pub fn everyone_role_id(&self) -> u64 {
        self.guild_id
    }
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self::juiceworks()
    }
}
