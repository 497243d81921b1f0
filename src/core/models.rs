use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use slack_morphism::{SlackChannelId, SlackTs, SlackUserId};

/// Coarse conversation kind derived from Slack's `is_*` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Public,
    Private,
    DirectMessage,
    GroupMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: SlackChannelId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_channel: bool,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub is_im: bool,
    #[serde(default)]
    pub is_mpim: bool,
    #[serde(default)]
    pub is_private: bool,
}

impl Channel {
    #[must_use]
    pub fn kind(&self) -> ChannelKind {
        if self.is_im {
            ChannelKind::DirectMessage
        } else if self.is_mpim {
            ChannelKind::GroupMessage
        } else if self.is_private || self.is_group {
            ChannelKind::Private
        } else {
            ChannelKind::Public
        }
    }
}

/// A message as returned by `conversations.history`.
///
/// Fields the crate does not model explicitly are kept in `extra` so that
/// [`MessageFilter`] can match on any field Slack sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub ts: SlackTs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SlackUserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    #[must_use]
    pub fn new(ts: &str, user: Option<&str>, text: &str) -> Self {
        Self {
            ts: SlackTs(ts.to_string()),
            user: user.map(|u| SlackUserId(u.to_string())),
            bot_id: None,
            username: None,
            text: text.to_string(),
            subtype: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_subtype(mut self, subtype: &str) -> Self {
        self.subtype = Some(subtype.to_string());
        self
    }

    /// String value of a top-level field, `None` when absent or not a string.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "ts" => Some(self.ts.0.as_str()),
            "user" => self.user.as_ref().map(|u| u.0.as_str()),
            "bot_id" => self.bot_id.as_deref(),
            "username" => self.username.as_deref(),
            "text" => Some(self.text.as_str()),
            "subtype" => self.subtype.as_deref(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

/// Restricts a bulk delete to messages whose `field` holds one of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFilter {
    pub field: String,
    pub values: Vec<String>,
}

impl MessageFilter {
    #[must_use]
    pub fn new<I, S>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn subtype<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("subtype", values)
    }

    /// A message lacking the field never matches.
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        message
            .field(&self.field)
            .is_some_and(|value| self.values.iter().any(|v| v == value))
    }
}

/// Identifies a channel either directly or by its cached name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    Id(String),
    Name(String),
}

impl ChannelRef {
    /// Parse a user-supplied channel name; a leading `#` is ignored.
    #[must_use]
    pub fn name(name: &str) -> Self {
        Self::Name(name.trim_start_matches('#').to_string())
    }

    #[must_use]
    pub fn id(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}
