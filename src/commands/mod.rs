use anyhow::Result;

use crate::{runtime::Runtime, sender::send_message, slack::PostMessage};

pub mod config;

use config::{Config, Options};

/// Posts `message` to `channel`: load the token, connect, deliver.
#[tracing::instrument(skip(runtime, options, message))]
pub async fn msg<R: Runtime>(
    runtime: R,
    options: &Options,
    message: &str,
    channel: &str,
) -> Result<()> {
    let config = Config::new(runtime, options)?;
    run(message, channel, &config).await
}

#[tracing::instrument(skip(message, config))]
pub async fn run<R: Runtime, P: PostMessage>(
    message: &str,
    channel: &str,
    config: &Config<R, P>,
) -> Result<()> {
    send_message(
        &config.runtime,
        &config.client,
        message,
        channel,
        &config.retry,
    )
    .await?;
    Ok(())
}
