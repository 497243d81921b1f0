//! All Slack-specific functionality

pub mod api;
pub mod block_builder;
pub mod client;
pub mod gateway;

// Re-export main types for convenience
pub use api::SlackApi;
pub use block_builder::render;
pub use client::SlackClient;
pub use gateway::{BulkDeleteOutcome, Confirmation, Gateway};
