use std::env;

use crate::errors::SlackError;

pub const SLACK_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
pub const DEFAULT_SLACK_CHANNEL: &str = "DEFAULT_SLACK_CHANNEL";
pub const SLACK_API_URL: &str = "SLACK_API_URL";

/// Base URL of the Slack Web API.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub default_channel: Option<String>,
    pub slack_api_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first;
    /// variables already set in the environment take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::MissingConfig` if `SLACK_BOT_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self, SlackError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::MissingConfig` if the bot token is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let slack_bot_token = non_empty(SLACK_BOT_TOKEN)
            .ok_or_else(|| SlackError::MissingConfig(SLACK_BOT_TOKEN.to_string()))?;

        Ok(Self {
            slack_bot_token,
            default_channel: non_empty(DEFAULT_SLACK_CHANNEL),
            slack_api_url: non_empty(SLACK_API_URL).map_or_else(
                || DEFAULT_SLACK_API_URL.to_string(),
                |url| url.trim_end_matches('/').to_string(),
            ),
        })
    }

    /// The configured default channel.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::NoDefaultChannel` when `DEFAULT_SLACK_CHANNEL` was not set.
    pub fn require_default_channel(&self) -> Result<&str, SlackError> {
        self.default_channel
            .as_deref()
            .ok_or(SlackError::NoDefaultChannel)
    }
}
