//! The remote Slack capability the gateway talks through.

use async_trait::async_trait;
use serde_json::Value;
use slack_morphism::SlackTs;

use crate::core::models::{Channel, Message};
use crate::errors::SlackyError;

/// One method per Slack Web API endpoint used by slacky.
///
/// Implementations must fail with [`SlackyError::RemoteCall`] whenever Slack
/// answers `ok: false`.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// `conversations.list`
    async fn list_conversations(
        &self,
        types: &str,
        exclude_archived: bool,
    ) -> Result<Vec<Channel>, SlackyError>;

    /// `conversations.history`, newest message first.
    async fn conversations_history(&self, channel_id: &str) -> Result<Vec<Message>, SlackyError>;

    /// `chat.postMessage`; returns the new message's timestamp.
    async fn post_message(
        &self,
        channel_id: &str,
        text: &str,
        as_user: bool,
    ) -> Result<SlackTs, SlackyError>;

    /// `chat.update` replacing the message content with `blocks`.
    async fn update_message(
        &self,
        channel_id: &str,
        ts: &SlackTs,
        blocks: &[Value],
        as_user: bool,
    ) -> Result<(), SlackyError>;

    /// `chat.delete`
    async fn delete_message(&self, channel_id: &str, ts: &SlackTs) -> Result<(), SlackyError>;
}
