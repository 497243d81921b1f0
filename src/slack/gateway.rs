//! Channel-level operations over a [`SlackApi`] session.

use serde_json::Value;
use slack_morphism::SlackTs;
use tracing::{debug, error, info};

use super::api::SlackApi;
use crate::confirm::Confirm;
use crate::core::config::{
    BOT_MESSAGE_SUBTYPE, CHANNEL_TYPES, EXCLUDE_ARCHIVED, PLACEHOLDER_TEXT, POST_AS_USER,
    SLACK_GENERATED_SUBTYPES,
};
use crate::core::models::{Channel, ChannelRef, Message, MessageFilter};
use crate::errors::SlackyError;

/// Whether a bulk delete asks before acting.
pub enum Confirmation<'a> {
    /// Skip the prompt.
    Override,
    /// Ask through the given provider; anything but a yes aborts.
    Prompt(&'a dyn Confirm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    Aborted,
    Deleted { deleted: usize, skipped: usize },
}

/// Owns the Slack session and the channel list fetched at connect time.
///
/// The channel cache is populated once by [`Gateway::connect`] and never
/// refreshed; channels created or renamed afterwards are not visible.
pub struct Gateway<A: SlackApi> {
    api: A,
    channels: Vec<Channel>,
}

impl<A: SlackApi> Gateway<A> {
    /// # Errors
    ///
    /// Returns an error if the initial `conversations.list` call fails.
    pub async fn connect(api: A) -> Result<Self, SlackyError> {
        let channels = list_channels(&api).await?;
        info!("Cached {} channels", channels.len());
        Ok(Self { api, channels })
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Fetch the channel list from Slack. Does not touch the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn list_channels(&self) -> Result<Vec<Channel>, SlackyError> {
        list_channels(&self.api).await
    }

    /// # Errors
    ///
    /// Returns `SlackyError::NotFound` if no cached channel has this name.
    pub fn resolve_channel_id(&self, name: &str) -> Result<String, SlackyError> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.0.clone())
            .ok_or_else(|| SlackyError::NotFound(format!("no channel named #{name}")))
    }

    /// # Errors
    ///
    /// Returns `SlackyError::NotFound` for an unknown channel name.
    pub fn channel_id(&self, channel: &ChannelRef) -> Result<String, SlackyError> {
        match channel {
            ChannelRef::Id(id) => Ok(id.clone()),
            ChannelRef::Name(name) => self.resolve_channel_id(name),
        }
    }

    /// Display name for prompts; falls back to the id when it is not cached.
    fn channel_label(&self, channel: &ChannelRef) -> String {
        match channel {
            ChannelRef::Name(name) => name.clone(),
            ChannelRef::Id(id) => self
                .channels
                .iter()
                .find(|c| &c.id.0 == id)
                .map_or_else(|| id.clone(), |c| c.name.clone()),
        }
    }

    /// Channel history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn list_messages(&self, channel_id: &str) -> Result<Vec<Message>, SlackyError> {
        let messages = self.api.conversations_history(channel_id).await?;
        debug!("Fetched {} messages from {}", messages.len(), channel_id);
        Ok(messages)
    }

    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn post_placeholder(&self, channel_id: &str) -> Result<SlackTs, SlackyError> {
        let ts = self
            .api
            .post_message(channel_id, PLACEHOLDER_TEXT, POST_AS_USER)
            .await?;
        info!("Posted placeholder {} in {}", ts.0, channel_id);
        Ok(ts)
    }

    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn update_message(
        &self,
        channel_id: &str,
        ts: &SlackTs,
        blocks: &[Value],
    ) -> Result<(), SlackyError> {
        self.api
            .update_message(channel_id, ts, blocks, POST_AS_USER)
            .await?;
        info!("Updated {} in {} with {} blocks", ts.0, channel_id, blocks.len());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the Slack API call fails.
    pub async fn delete_message(&self, channel_id: &str, ts: &SlackTs) -> Result<(), SlackyError> {
        match self.api.delete_message(channel_id, ts).await {
            Ok(()) => {
                debug!("Deleted message {} from {}", ts.0, channel_id);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete message {}: {}", ts.0, e);
                Err(e)
            }
        }
    }

    /// Delete channel messages, optionally restricted by `filter`.
    ///
    /// When `messages` is `None` the current history is fetched; an empty
    /// `Some` deletes nothing. Deletion is
    /// irreversible and stops at the first failed call.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is unknown, the prompt cannot be read,
    /// or any Slack API call fails.
    pub async fn bulk_delete(
        &self,
        channel: &ChannelRef,
        messages: Option<Vec<Message>>,
        filter: Option<&MessageFilter>,
        confirmation: Confirmation<'_>,
    ) -> Result<BulkDeleteOutcome, SlackyError> {
        let channel_id = self.channel_id(channel)?;

        if let Confirmation::Prompt(confirm) = confirmation {
            let label = self.channel_label(channel);
            let prompt = format!(
                "Are you sure you want to delete all messages from the channel #{label}? Y/N"
            );
            if !confirm.confirm(&prompt)? {
                println!("Aborting nuclear delete on channel #{label}");
                info!("Bulk delete on {} declined", channel_id);
                return Ok(BulkDeleteOutcome::Aborted);
            }
        }

        let messages = match messages {
            Some(messages) => messages,
            None => self.list_messages(&channel_id).await?,
        };

        let mut deleted = 0;
        let mut skipped = 0;
        for message in &messages {
            if filter.is_none_or(|f| f.matches(message)) {
                self.delete_message(&channel_id, &message.ts).await?;
                deleted += 1;
            } else {
                skipped += 1;
            }
        }

        info!(
            "Bulk delete on {}: {} deleted, {} skipped",
            channel_id, deleted, skipped
        );
        Ok(BulkDeleteOutcome::Deleted { deleted, skipped })
    }

    /// Delete the housekeeping messages Slack posts (joins, topic changes, pins).
    ///
    /// # Errors
    ///
    /// Returns an error if any Slack API call fails.
    pub async fn delete_slack_generated(
        &self,
        channel: &ChannelRef,
    ) -> Result<BulkDeleteOutcome, SlackyError> {
        let filter = MessageFilter::subtype(SLACK_GENERATED_SUBTYPES.iter().copied());
        self.bulk_delete(channel, None, Some(&filter), Confirmation::Override)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if any Slack API call fails.
    pub async fn delete_bot_messages(
        &self,
        channel: &ChannelRef,
    ) -> Result<BulkDeleteOutcome, SlackyError> {
        let filter = MessageFilter::subtype([BOT_MESSAGE_SUBTYPE]);
        self.bulk_delete(channel, None, Some(&filter), Confirmation::Override)
            .await
    }

    /// Delete exactly `messages`, without asking.
    ///
    /// # Errors
    ///
    /// Returns an error if any Slack API call fails.
    pub async fn delete_set_messages(
        &self,
        channel: &ChannelRef,
        messages: Vec<Message>,
    ) -> Result<BulkDeleteOutcome, SlackyError> {
        self.bulk_delete(channel, Some(messages), None, Confirmation::Override)
            .await
    }
}

async fn list_channels<A: SlackApi>(api: &A) -> Result<Vec<Channel>, SlackyError> {
    api.list_conversations(CHANNEL_TYPES, EXCLUDE_ARCHIVED).await
}
