/// Command dispatch: routes `Command` variants to the delivery functions.
use crate::cli::args::{Command, MessageArgs, QuickArgs, StatusArgs};
use crate::core::config::AppConfig;
use crate::core::features::deliver;
use crate::core::models::StatusUpdate;
use crate::errors::SlackError;
use crate::slack::client::MessageSender;

/// Run a parsed `Command` and return the success text to report.
///
/// # Errors
///
/// Returns `SlackError` on any command failure.
pub async fn dispatch<S: MessageSender + ?Sized>(
    command: &Command,
    config: &AppConfig,
    sender: &S,
) -> Result<String, SlackError> {
    match command {
        Command::Message(args) => message(args, sender).await,
        Command::Quick(args) => quick(args, config, sender).await,
        Command::Status(args) => status(args, sender).await,
    }
}

async fn message<S: MessageSender + ?Sized>(
    args: &MessageArgs,
    sender: &S,
) -> Result<String, SlackError> {
    deliver::send_message(sender, &args.channel, &args.message).await?;
    Ok("Message sent successfully".to_string())
}

async fn quick<S: MessageSender + ?Sized>(
    args: &QuickArgs,
    config: &AppConfig,
    sender: &S,
) -> Result<String, SlackError> {
    let channel = deliver::send_to_default_channel(sender, config, &args.message).await?;
    Ok(format!("Message sent to {channel}"))
}

async fn status<S: MessageSender + ?Sized>(
    args: &StatusArgs,
    sender: &S,
) -> Result<String, SlackError> {
    let update = StatusUpdate {
        channel: args.channel.clone(),
        status: args.status.clone(),
        progress: args.progress,
    };
    deliver::send_status_update(sender, &update).await?;
    Ok("Status update sent successfully".to_string())
}
