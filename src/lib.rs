//! slack-send - post messages and status updates to Slack from the command line.
//!
//! Configuration comes from the environment (`SLACK_BOT_TOKEN`, optional
//! `DEFAULT_SLACK_CHANNEL`) and is loaded once into an [`AppConfig`]. Every
//! invocation performs a single `chat.postMessage` call through a
//! [`MessageSender`].
//!
//! # Example
//!
//! ```no_run
//! use slack_send::core::config::AppConfig;
//! use slack_send::core::features::deliver;
//! use slack_send::slack::SlackClient;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slack_send::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = SlackClient::from_config(&config);
//!
//!     deliver::send_message(&client, "#general", "Deploy finished").await?;
//!     Ok(())
//! }
//! ```
pub mod cli;
pub mod core;
pub mod errors;
pub mod slack;

pub use crate::core::config::AppConfig;
pub use crate::errors::SlackError;
pub use crate::slack::{MessageSender, SlackClient};

/// Configure logging to stderr.
///
/// The level comes from `RUST_LOG` and defaults to `warn`, so stdout carries
/// only the command result. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// slack_send::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let default_level = if cfg!(feature = "debug-logs") { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
