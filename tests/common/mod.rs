#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use slack_morphism::{SlackChannelId, SlackTs};
use slacky::confirm::{Confirm, is_affirmative};
use slacky::core::models::{Channel, Message};
use slacky::errors::SlackyError;
use slacky::slack::SlackApi;

pub const SUMMARY_TS: &str = "1700009999.000100";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListConversations { types: String, exclude_archived: bool },
    History { channel: String },
    Post { channel: String, text: String, as_user: bool },
    Update { channel: String, ts: String, blocks: Vec<Value> },
    Delete { channel: String, ts: String },
}

/// In-memory Slack that records every call in order.
pub struct RecordingApi {
    channels: Vec<Channel>,
    messages: Vec<Message>,
    fail_method: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingApi {
    pub fn new(channels: Vec<Channel>, messages: Vec<Message>) -> Self {
        Self {
            channels,
            messages,
            fail_method: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the named Web API method answer `ok: false`.
    pub fn failing(mut self, method: &'static str) -> Self {
        self.fail_method = Some(method);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deleted_ts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete { ts, .. } => Some(ts),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, method: &str, call: Call) -> Result<(), SlackyError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_method == Some(method) {
            return Err(SlackyError::RemoteCall {
                method: method.to_string(),
                error: "fake_failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SlackApi for RecordingApi {
    async fn list_conversations(
        &self,
        types: &str,
        exclude_archived: bool,
    ) -> Result<Vec<Channel>, SlackyError> {
        self.record(
            "conversations.list",
            Call::ListConversations {
                types: types.to_string(),
                exclude_archived,
            },
        )?;
        Ok(self.channels.clone())
    }

    async fn conversations_history(&self, channel_id: &str) -> Result<Vec<Message>, SlackyError> {
        self.record(
            "conversations.history",
            Call::History {
                channel: channel_id.to_string(),
            },
        )?;
        Ok(self.messages.clone())
    }

    async fn post_message(
        &self,
        channel_id: &str,
        text: &str,
        as_user: bool,
    ) -> Result<SlackTs, SlackyError> {
        self.record(
            "chat.postMessage",
            Call::Post {
                channel: channel_id.to_string(),
                text: text.to_string(),
                as_user,
            },
        )?;
        Ok(SlackTs(SUMMARY_TS.to_string()))
    }

    async fn update_message(
        &self,
        channel_id: &str,
        ts: &SlackTs,
        blocks: &[Value],
        _as_user: bool,
    ) -> Result<(), SlackyError> {
        self.record(
            "chat.update",
            Call::Update {
                channel: channel_id.to_string(),
                ts: ts.0.clone(),
                blocks: blocks.to_vec(),
            },
        )
    }

    async fn delete_message(&self, channel_id: &str, ts: &SlackTs) -> Result<(), SlackyError> {
        self.record(
            "chat.delete",
            Call::Delete {
                channel: channel_id.to_string(),
                ts: ts.0.clone(),
            },
        )
    }
}

/// Confirmation fake that remembers the prompts it was shown.
pub struct ScriptedConfirm {
    answer: String,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, SlackyError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(is_affirmative(&self.answer))
    }
}

pub fn channel(id: &str, name: &str) -> Channel {
    Channel {
        id: SlackChannelId(id.to_string()),
        name: name.to_string(),
        is_archived: false,
        is_channel: true,
        is_group: false,
        is_im: false,
        is_mpim: false,
        is_private: false,
    }
}

pub fn workspace_channels() -> Vec<Channel> {
    vec![
        channel("C001", "general"),
        channel("C002", "random"),
        channel("C003", "deploys"),
    ]
}

/// Three user messages, newest first as Slack returns them.
pub fn three_messages() -> Vec<Message> {
    vec![
        Message::new("1700000300.000000", Some("U3"), "third"),
        Message::new("1700000200.000000", Some("U2"), "second"),
        Message::new("1700000100.000000", Some("U1"), "first"),
    ]
}
