use serde::Serialize;
use serde_json::Value;

/// Optional Block Kit payloads sent alongside the plain text.
///
/// The values are forwarded to `chat.postMessage` exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    pub channel: String,
    pub text: String,
    #[serde(flatten)]
    pub rich: RichContent,
}

impl MessageRequest {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            rich: RichContent::default(),
        }
    }

    #[must_use]
    pub fn with_rich_content(mut self, rich: RichContent) -> Self {
        self.rich = rich;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub channel: String,
    pub status: String,
    pub progress: Option<i64>,
}
