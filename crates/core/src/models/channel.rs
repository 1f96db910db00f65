use std::fmt;

use crate::errors::{CommandError, CommandResult};

pub const MIN_CHANNEL_NAME_LEN: usize = 2;
pub const MAX_CHANNEL_NAME_LEN: usize = 100;

/// A text channel name that has been normalized and length-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelName(String);

impl ChannelName {
    /// Trim, lower-case, then turn spaces into hyphens.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase().replace(' ', "-")
    }

    /// Normalize `raw` and accept it if the result is 2 to 100 bytes long.
    pub fn parse(raw: &str) -> CommandResult<Self> {
        let name = Self::normalize(raw);
        if !(MIN_CHANNEL_NAME_LEN..=MAX_CHANNEL_NAME_LEN).contains(&name.len()) {
            return Err(CommandError::ChannelNameLength);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
