//! Slack Web API client.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, PostMessage, SlackClient, channel_target};
#[cfg(test)]
pub use client::MockPostMessage;
pub use error::{DeliveryError, classify_error};
pub use types::PostedMessage;
