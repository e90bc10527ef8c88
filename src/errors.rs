use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("{0} environment variable is required")]
    MissingConfig(String),

    #[error(
        "No default channel configured. Set DEFAULT_SLACK_CHANNEL environment variable or use the \"message\" command with --channel flag."
    )]
    NoDefaultChannel,

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Slack client error: {0}")]
    GeneralError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error_chain(&error))
    }
}

/// Render an error and every cause below it, joined with `": "`.
///
/// Causes whose text already appears in the message are skipped.
#[must_use]
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

impl SlackError {
    /// Process exit status reported for this error.
    ///
    /// Configuration problems and remote failures are not distinguished on the
    /// command line; callers read the printed message for the reason.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfig(_)
            | Self::NoDefaultChannel
            | Self::ApiError(_)
            | Self::HttpError(_)
            | Self::GeneralError(_) => 1,
        }
    }

    /// True when the failure happened before any request was sent.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingConfig(_) | Self::NoDefaultChannel)
    }
}
