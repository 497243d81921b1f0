use std::env;

use crate::errors::SlackyError;

/// Conversation types requested from `conversations.list`.
pub const CHANNEL_TYPES: &str = "public_channel,private_channel";

/// Archived channels are never listed.
pub const EXCLUDE_ARCHIVED: bool = true;

/// Post and update as the authed user rather than as the app.
pub const POST_AS_USER: bool = true;

/// Text of the provisional message that later receives the rendered summary.
pub const PLACEHOLDER_TEXT: &str = "placeholder";

/// Subtype Slack assigns to messages posted by integrations.
pub const BOT_MESSAGE_SUBTYPE: &str = "bot_message";

/// Subtypes of messages Slack itself generates for channel housekeeping.
pub const SLACK_GENERATED_SUBTYPES: &[&str] = &[
    "channel_join",
    "channel_leave",
    "channel_topic",
    "channel_purpose",
    "channel_name",
    "channel_archive",
    "channel_unarchive",
    "group_join",
    "group_leave",
    "group_topic",
    "group_purpose",
    "group_name",
    "pinned_item",
    "unpinned_item",
];

pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";

pub const TOKEN_VAR: &str = "SLACK_API_TOKEN";
pub const BASE_URL_VAR: &str = "SLACK_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_api_token: String,
    pub slack_api_base_url: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `SlackyError::AuthConfig` when `SLACK_API_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self, SlackyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `SlackyError::AuthConfig` when the token is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_api_token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SlackyError::AuthConfig(format!("{TOKEN_VAR} is not set")))?;

        let slack_api_base_url = lookup(BASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .map_or_else(
                || DEFAULT_API_BASE_URL.to_string(),
                |u| u.trim_end_matches('/').to_string(),
            );

        Ok(Self {
            slack_api_token,
            slack_api_base_url,
        })
    }
}
