/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// slack-send — post messages to Slack channels.
#[derive(Debug, Parser)]
#[command(
    name = "slack-send",
    about = "Send messages to Slack channels from Claude Code",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message to a Slack channel.
    Message(MessageArgs),
    /// Send a quick message to the default channel.
    Quick(QuickArgs),
    /// Send a Claude Code status update.
    Status(StatusArgs),
}

/// Arguments for `slack-send message`.
#[derive(Debug, Parser)]
pub struct MessageArgs {
    /// Slack channel (e.g., #general or @username).
    #[arg(short, long)]
    pub channel: String,

    /// Message text to send.
    #[arg(short, long)]
    pub message: String,
}

/// Arguments for `slack-send quick`.
#[derive(Debug, Parser)]
pub struct QuickArgs {
    /// Message text to send.
    #[arg(short, long)]
    pub message: String,
}

/// Arguments for `slack-send status`.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Slack channel.
    #[arg(short, long)]
    pub channel: String,

    /// Status message.
    #[arg(short, long)]
    pub status: String,

    /// Progress percentage (0-100). Values outside the range are clamped.
    #[arg(short, long, value_name = "0-100", allow_negative_numbers = true)]
    pub progress: Option<i64>,
}
