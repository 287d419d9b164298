//! Message delivery with bounded retry.

use anyhow::Result;
use tracing::{error, info};

use crate::error::HermesError;
use crate::retry::{RetryPolicy, with_retry};
use crate::runtime::Runtime;
use crate::slack::{PostMessage, PostedMessage};

/// Posts `text` to `channel`, retrying every failure per `policy`.
///
/// Logs one entry per failed attempt, then either
/// `Sending message to <channel> - Message sent!` or the terminal failure,
/// which is also returned as [`HermesError::SendFailure`].
#[tracing::instrument(skip(runtime, client, text, policy))]
pub async fn send_message<R: Runtime, P: PostMessage>(
    runtime: &R,
    client: &P,
    text: &str,
    channel: &str,
    policy: &RetryPolicy,
) -> Result<PostedMessage> {
    let label = format!("Sending message to {}", channel);

    let result = with_retry(runtime, policy, &label, || client.post_message(channel, text)).await;

    match result {
        Ok(posted) => {
            info!("{} - Message sent!", label);
            Ok(posted)
        }
        Err(_) => {
            let err = HermesError::SendFailure {
                channel: channel.to_string(),
                attempts: policy.max_attempts,
            };
            error!("{}", err);
            Err(err.into())
        }
    }
}
