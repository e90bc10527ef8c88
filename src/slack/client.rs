//! Slack API client module
//!
//! Wraps `chat.postMessage` and normalizes its failures into `SlackError`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use slack_morphism::{SlackApiToken, SlackApiTokenValue};
use tracing::{debug, info};

use crate::core::config::{AppConfig, DEFAULT_SLACK_API_URL};
use crate::core::models::MessageRequest;
use crate::errors::SlackError;

/// Anything that can deliver a message to a Slack channel.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    async fn post_message(&self, request: &MessageRequest) -> Result<(), SlackError>;
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

/// JSON body for `chat.postMessage`.
///
/// Link and media unfurling are always disabled. `blocks` and `attachments`
/// are copied through untouched when present.
#[derive(Debug, Serialize)]
pub struct PostMessageBody<'a> {
    #[serde(flatten)]
    pub request: &'a MessageRequest,
    pub unfurl_links: bool,
    pub unfurl_media: bool,
}

impl<'a> From<&'a MessageRequest> for PostMessageBody<'a> {
    fn from(request: &'a MessageRequest) -> Self {
        Self {
            request,
            unfurl_links: false,
            unfurl_media: false,
        }
    }
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    token: SlackApiToken,
    api_url: String,
    http: Client,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self::with_api_url(token, DEFAULT_SLACK_API_URL)
    }

    /// Client that talks to a Web API rooted at `api_url` instead of slack.com.
    #[must_use]
    pub fn with_api_url(token: String, api_url: &str) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            api_url: api_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_api_url(config.slack_bot_token.clone(), &config.slack_api_url)
    }

    #[must_use]
    pub fn token(&self) -> &SlackApiToken {
        &self.token
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl MessageSender for SlackClient {
    async fn post_message(&self, request: &MessageRequest) -> Result<(), SlackError> {
        let payload = PostMessageBody::from(request);
        debug!(channel = %request.channel, "Posting message");

        let resp = self
            .http
            .post(format!("{}/chat.postMessage", self.api_url))
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "chat.postMessage HTTP {}",
                resp.status()
            )));
        }

        let body: PostMessageResponse = resp.json().await.map_err(|e| {
            SlackError::GeneralError(format!("chat.postMessage JSON parse error: {e}"))
        })?;

        if !body.ok {
            return Err(SlackError::ApiError(format!(
                "Failed to send message: {}",
                body.error.as_deref().unwrap_or("unknown")
            )));
        }

        info!("Message sent successfully to {}", request.channel);
        Ok(())
    }
}
