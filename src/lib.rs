//! Slacky - summarizes a Slack channel into a single message and clears the originals.
//!
//! The crate reads a channel's history, renders it into Block Kit blocks, posts a
//! placeholder, overwrites the placeholder with the rendered summary, and deletes
//! the source messages. It also offers filtered bulk deletion.
//!
//! # Architecture
//!
//! - [`slack::SlackApi`] is the remote capability, one method per Web API endpoint
//! - [`slack::SlackClient`] implements it over reqwest
//! - [`slack::Gateway`] owns a session plus the channel cache
//! - [`slack::block_builder`] renders messages into blocks
//! - [`workflow::parse_channel`] runs the summarize-then-delete sequence
//!
//! # Example
//!
//! ```no_run
//! use slacky::core::config::AppConfig;
//! use slacky::core::models::ChannelRef;
//! use slacky::slack::{Gateway, SlackClient};
//! use slacky::workflow::{ParseOutcome, parse_channel};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slacky::setup_logging(false);
//!
//!     let config = AppConfig::from_env()?;
//!     let gateway = Gateway::connect(SlackClient::from_config(&config)).await?;
//!
//!     match parse_channel(&gateway, &ChannelRef::name("general")).await? {
//!         ParseOutcome::Empty => println!("Nothing to summarize"),
//!         ParseOutcome::Summarized { summary_ts, deleted } => {
//!             println!("Summary {} replaced {} messages", summary_ts.0, deleted);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
pub mod confirm;
pub mod core;
pub mod errors;
pub mod slack;
pub mod workflow;

pub use errors::SlackyError;

/// Configure logging for the command line.
///
/// Logs go to stderr so stdout stays free for command output. `RUST_LOG`
/// takes precedence; otherwise the level is `info`, or `debug` when `verbose`.
/// Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// slacky::setup_logging(false);
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
