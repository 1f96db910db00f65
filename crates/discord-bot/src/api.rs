use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use juiceworks_core::models::permission::{PermissionGrant, PermissionSubject};
use serenity::{
    http::Http,
    model::{
        channel::{ChannelType, PermissionOverwrite, PermissionOverwriteType},
        id::{ChannelId, GuildId, RoleId, UserId},
        permissions::Permissions,
    },
};

/// A channel freshly created by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedChannel {
    pub id: u64,
    pub name: String,
}

/// The guild-scoped platform calls the command handlers need.
///
/// Every call talks to the one configured guild. Nothing is cached: each
/// invocation reads fresh data.
#[async_trait]
pub trait GuildApi: Send + Sync {
    /// Role ids currently held by `user_id`.
    async fn member_roles(&self, user_id: u64) -> Result<Vec<u64>>;

    /// Always issues the grant, even if the member already holds the role.
    async fn grant_role(&self, user_id: u64, role_id: u64) -> Result<()>;

    async fn create_text_channel(&self, name: String) -> Result<CreatedChannel>;

    async fn set_channel_permission(&self, channel_id: u64, grant: PermissionGrant) -> Result<()>;
}

/// [`GuildApi`] backed by serenity's REST client.
#[derive(Clone)]
pub struct SerenityGuildApi {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityGuildApi {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId(guild_id),
        }
    }
}

#[async_trait]
impl GuildApi for SerenityGuildApi {
    async fn member_roles(&self, user_id: u64) -> Result<Vec<u64>> {
        let member = self.http.get_member(self.guild_id.0, user_id).await?;
        Ok(member.roles.iter().map(|role| role.0).collect())
    }

    async fn grant_role(&self, user_id: u64, role_id: u64) -> Result<()> {
        self.http
            .add_member_role(self.guild_id.0, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn create_text_channel(&self, name: String) -> Result<CreatedChannel> {
        let channel = self
            .guild_id
            .create_channel(&self.http, |c| c.name(name).kind(ChannelType::Text))
            .await?;

        Ok(CreatedChannel {
            id: channel.id.0,
            name: channel.name,
        })
    }

    async fn set_channel_permission(&self, channel_id: u64, grant: PermissionGrant) -> Result<()> {
        ChannelId(channel_id)
            .create_permission(&self.http, &to_overwrite(grant))
            .await?;
        Ok(())
    }
}

fn to_overwrite(grant: PermissionGrant) -> PermissionOverwrite {
    let kind = match grant.subject {
        PermissionSubject::Role(id) => PermissionOverwriteType::Role(RoleId(id)),
        PermissionSubject::Member(id) => PermissionOverwriteType::Member(UserId(id)),
    };

    PermissionOverwrite {
        allow: Permissions::from_bits_truncate(grant.allow),
        deny: Permissions::from_bits_truncate(grant.deny),
        kind,
    }
}
