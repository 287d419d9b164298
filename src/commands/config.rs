use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::{
    credential::{TOKEN_PREFIX, default_token_path, load_credential},
    retry::{DEFAULT_RETRY_DELAY, RetryPolicy},
    runtime::Runtime,
    slack::{PostMessage, SlackClient},
};

/// Settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Token file; defaults to `slack_token` next to the executable.
    pub token_file: Option<PathBuf>,
    /// Slack Web API base URL.
    pub api_url: Option<String>,
    pub retry_delay: Duration,
    /// Require the `xoxb-` prefix.
    pub check_prefix: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            token_file: None,
            api_url: None,
            retry_delay: DEFAULT_RETRY_DELAY,
            check_prefix: true,
        }
    }
}

pub struct Config<R: Runtime, P: PostMessage> {
    pub runtime: R,
    pub client: P,
    pub retry: RetryPolicy,
}

impl<R: Runtime> Config<R, SlackClient> {
    /// Loads the credential and connects. Nothing here is retried.
    pub fn new(runtime: R, options: &Options) -> Result<Self> {
        let token_path = match &options.token_file {
            Some(path) => path.clone(),
            None => default_token_path(&runtime)?,
        };
        debug!("Reading Slack token from {}", token_path.display());

        let prefix = options.check_prefix.then_some(TOKEN_PREFIX);
        let credential = load_credential(&runtime, &token_path, prefix)?;
        let client = SlackClient::connect(&credential, options.api_url.clone())?;

        Ok(Self {
            runtime,
            client,
            retry: RetryPolicy::with_delay(options.retry_delay),
        })
    }
}
