//! Block Kit rendering of channel history.
//!
//! Turns fetched messages into the `section` blocks that replace the
//! placeholder message. Pure and deterministic: one block per message, in
//! the order given.

use chrono::DateTime;
use serde_json::{Value, json};

use crate::core::models::Message;

/// Slack rejects `section` text longer than this many characters.
pub const SECTION_TEXT_LIMIT: usize = 3000;

const TRUNCATION_MARKER: char = '…';
const EMPTY_TEXT: &str = "_(no text)_";

/// Render messages into Block Kit blocks, preserving input order.
///
/// # Examples
///
/// ```
/// use slacky::core::models::Message;
/// use slacky::slack::block_builder::render;
///
/// let blocks = render(&[Message::new("1700000000.000100", Some("U1"), "hello")]);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0]["type"], "section");
/// ```
#[must_use]
pub fn render(messages: &[Message]) -> Vec<Value> {
    messages.iter().map(render_message).collect()
}

#[must_use]
pub fn render_message(message: &Message) -> Value {
    let header = match format_timestamp(&message.ts.0) {
        Some(when) => format!("*{}*  _{when}_", author_label(message)),
        None => format!("*{}*", author_label(message)),
    };
    let body = if message.text.trim().is_empty() {
        EMPTY_TEXT
    } else {
        message.text.as_str()
    };

    json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": truncate(&format!("{header}\n{body}"), SECTION_TEXT_LIMIT),
        }
    })
}

fn author_label(message: &Message) -> String {
    if let Some(user) = &message.user {
        return format!("<@{}>", user.0);
    }
    message
        .username
        .clone()
        .or_else(|| message.bot_id.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Slack timestamps are `<unix seconds>.<micros>`.
fn format_timestamp(ts: &str) -> Option<String> {
    let (secs, frac) = ts.split_once('.').unwrap_or((ts, "0"));
    let secs: i64 = secs.parse().ok()?;
    let micros: u32 = frac.parse().unwrap_or(0);
    let when = DateTime::from_timestamp(secs, micros.saturating_mul(1000))?;
    Some(when.format("%Y-%m-%d %H:%M UTC").to_string())
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit - 1).collect();
    out.push(TRUNCATION_MARKER);
    out
}
