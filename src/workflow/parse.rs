#![allow(clippy::missing_errors_doc)]
use slack_morphism::SlackTs;
use tracing::info;

use crate::core::models::ChannelRef;
use crate::errors::SlackyError;
use crate::slack::api::SlackApi;
use crate::slack::block_builder::render;
use crate::slack::gateway::{BulkDeleteOutcome, Gateway};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The channel had no messages; nothing was posted or deleted.
    Empty,
    Summarized { summary_ts: SlackTs, deleted: usize },
}

/// Summarize a channel into one message and delete the originals.
///
/// Steps run strictly in order and the first failure ends the run with no
/// rollback: a failed delete leaves the summary posted and some originals
/// in place. The originals are deleted once the update succeeds, without
/// comparing the rendered blocks against what was fetched.
pub async fn parse_channel<A: SlackApi>(
    gateway: &Gateway<A>,
    channel: &ChannelRef,
) -> Result<ParseOutcome, SlackyError> {
    let channel_id = gateway.channel_id(channel)?;

    let messages = gateway.list_messages(&channel_id).await?;
    if messages.is_empty() {
        info!("No messages in {}, nothing to summarize", channel_id);
        return Ok(ParseOutcome::Empty);
    }

    let summary_ts = gateway.post_placeholder(&channel_id).await?;
    let blocks = render(&messages);
    gateway
        .update_message(&channel_id, &summary_ts, &blocks)
        .await?;

    let id_ref = ChannelRef::Id(channel_id);
    let deleted = match gateway.delete_set_messages(&id_ref, messages).await? {
        BulkDeleteOutcome::Deleted { deleted, .. } => deleted,
        BulkDeleteOutcome::Aborted => 0,
    };

    info!("Summarized {} messages into {}", deleted, summary_ts.0);
    Ok(ParseOutcome::Summarized {
        summary_ts,
        deleted,
    })
}
