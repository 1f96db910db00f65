use juiceworks_core::{
    errors::{CommandError, CommandResult},
    models::permission::PermissionGrant,
};
use tracing::error;

use crate::api::GuildApi;

/// Apply a single permission overwrite to `channel_id`.
///
/// A failure is logged and turned into the caller's error variant so the
/// handler can stop before its remaining steps. Success is silent.
pub async fn apply_permission<A, F>(
    api: &A,
    channel_id: u64,
    grant: PermissionGrant,
    on_error: F,
) -> CommandResult<()>
where
    A: GuildApi + ?Sized,
    F: FnOnce(eyre::Report) -> CommandError,
{
    if let Err(e) = api.set_channel_permission(channel_id, grant).await {
        error!(
            "Error setting channel permissions on {} for {:?}: {}",
            channel_id, grant.subject, e
        );
        return Err(on_error(e));
    }
    Ok(())
}
