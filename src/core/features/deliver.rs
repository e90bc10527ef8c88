use crate::core::config::AppConfig;
use crate::core::models::{MessageRequest, RichContent, StatusUpdate};
use crate::errors::SlackError;
use crate::slack::client::MessageSender;
use crate::slack::message_formatter::format_status_message;

/// Send text to a channel verbatim.
///
/// # Errors
///
/// Returns an error if the Slack call fails.
pub async fn send_message<S: MessageSender + ?Sized>(
    sender: &S,
    channel: &str,
    text: &str,
) -> Result<(), SlackError> {
    sender
        .post_message(&MessageRequest::new(channel, text))
        .await
}

/// Send text to the configured default channel and return that channel.
///
/// # Errors
///
/// Returns `SlackError::NoDefaultChannel` before any request is made when no
/// default channel is configured, or an error if the Slack call fails.
pub async fn send_to_default_channel<'a, S: MessageSender + ?Sized>(
    sender: &S,
    config: &'a AppConfig,
    text: &str,
) -> Result<&'a str, SlackError> {
    let channel = config.require_default_channel()?;
    send_message(sender, channel, text).await?;
    Ok(channel)
}

/// Send a banner-prefixed status update with an optional progress bar.
///
/// # Errors
///
/// Returns an error if the Slack call fails.
pub async fn send_status_update<S: MessageSender + ?Sized>(
    sender: &S,
    update: &StatusUpdate,
) -> Result<(), SlackError> {
    let text = format_status_message(&update.status, update.progress);
    send_message(sender, &update.channel, &text).await
}

/// Send text together with Block Kit `blocks`/`attachments`.
///
/// # Errors
///
/// Returns an error if the Slack call fails.
pub async fn send_formatted_message<S: MessageSender + ?Sized>(
    sender: &S,
    channel: &str,
    text: &str,
    rich: RichContent,
) -> Result<(), SlackError> {
    let request = MessageRequest::new(channel, text).with_rich_content(rich);
    sender.post_message(&request).await
}
