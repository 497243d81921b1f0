//! Slacky CLI - channel summaries and bulk deletion.
//!
//! # Usage
//!
//! ```bash
//! # Summarize #general into one message and delete the originals
//! slacky parse general
//!
//! # Same, addressing the channel by id
//! slacky parse --id C0123456789
//!
//! # Remove join/leave/topic noise
//! slacky delete-generated general
//!
//! # Delete everything posted by integrations
//! slacky delete-bots general
//!
//! # Delete every message (asks first unless --yes)
//! slacky nuke general
//!
//! # Delete only messages from two users
//! slacky nuke general --field user --value U01 --value U02
//! ```
//!
//! `SLACK_API_TOKEN` must hold a token with `channels:read`, `groups:read`,
//! `channels:history` and `chat:write` scopes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use slacky::confirm::StdinConfirm;
use slacky::core::config::AppConfig;
use slacky::core::models::{ChannelRef, MessageFilter};
use slacky::slack::{BulkDeleteOutcome, Confirmation, Gateway, SlackClient};
use slacky::workflow::{ParseOutcome, parse_channel};

#[derive(Parser)]
#[command(name = "slacky")]
#[command(author, version, about = "Summarize and clean up Slack channels")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the channels visible to the token
    Channels,
    /// Replace a channel's history with a single rendered summary
    Parse(ChannelArgs),
    /// Delete messages Slack generated (joins, leaves, topic changes, pins)
    DeleteGenerated(ChannelArgs),
    /// Delete messages posted by bots and integrations
    DeleteBots(ChannelArgs),
    /// Delete every message in a channel, optionally filtered
    Nuke {
        #[command(flatten)]
        channel: ChannelArgs,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Message field to filter on [default: subtype]
        #[arg(long, requires = "values")]
        field: Option<String>,

        /// Allowed value for the filter field (repeatable)
        #[arg(long = "value")]
        values: Vec<String>,
    },
}

#[derive(Args)]
struct ChannelArgs {
    /// Channel name, with or without a leading '#'
    #[arg(required_unless_present = "id", conflicts_with = "id")]
    name: Option<String>,

    /// Channel id instead of a name
    #[arg(long)]
    id: Option<String>,
}

impl ChannelArgs {
    fn channel_ref(&self) -> ChannelRef {
        match (&self.id, &self.name) {
            (Some(id), _) => ChannelRef::id(id),
            (None, Some(name)) => ChannelRef::name(name),
            (None, None) => ChannelRef::name(""),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    slacky::setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let gateway = Gateway::connect(SlackClient::from_config(&config))
        .await
        .context("failed to list channels")?;

    match cli.command {
        Commands::Channels => {
            for channel in gateway.channels() {
                println!("{}\t#{}\t{:?}", channel.id.0, channel.name, channel.kind());
            }
        }
        Commands::Parse(args) => match parse_channel(&gateway, &args.channel_ref()).await? {
            ParseOutcome::Empty => println!("No messages to summarize"),
            ParseOutcome::Summarized {
                summary_ts,
                deleted,
            } => println!("Posted summary {} and deleted {deleted} messages", summary_ts.0),
        },
        Commands::DeleteGenerated(args) => {
            let outcome = gateway.delete_slack_generated(&args.channel_ref()).await?;
            report(outcome);
        }
        Commands::DeleteBots(args) => {
            let outcome = gateway.delete_bot_messages(&args.channel_ref()).await?;
            report(outcome);
        }
        Commands::Nuke {
            channel,
            yes,
            field,
            values,
        } => {
            let filter = (!values.is_empty())
                .then(|| MessageFilter::new(field.as_deref().unwrap_or("subtype"), values));
            let confirmation = if yes {
                Confirmation::Override
            } else {
                Confirmation::Prompt(&StdinConfirm)
            };
            let outcome = gateway
                .bulk_delete(&channel.channel_ref(), None, filter.as_ref(), confirmation)
                .await?;
            report(outcome);
        }
    }

    Ok(())
}

fn report(outcome: BulkDeleteOutcome) {
    match outcome {
        BulkDeleteOutcome::Aborted => {}
        BulkDeleteOutcome::Deleted { deleted, skipped } => {
            println!("Deleted {deleted} messages, skipped {skipped}");
        }
    }
}
