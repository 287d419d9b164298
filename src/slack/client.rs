use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use tracing::{debug, error, info};

use super::error::{DeliveryError, classify_error};
use super::types::{PostMessageRequest, PostMessageResponse, PostedMessage};
use crate::credential::Credential;
use crate::error::HermesError;

/// Default Slack Web API base URL.
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// A single, non-retrying message delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostMessage: Send + Sync {
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostedMessage>;
}

/// Client handle for the Slack Web API.
///
/// The token lives in a sensitive default header of the inner client, so the
/// handle cannot be altered after construction.
#[derive(Debug, Clone)]
pub struct SlackClient {
    client: Client,
    api_url: String,
}

impl SlackClient {
    /// Wraps the credential in a client handle. Failures are logged and
    /// returned as [`HermesError::ConnectionFailure`] straight away.
    #[tracing::instrument(skip(credential, api_url))]
    pub fn connect(credential: &Credential, api_url: Option<String>) -> Result<Self> {
        match Self::build(credential, api_url) {
            Ok(client) => {
                info!("Connect to slack - Successful");
                Ok(client)
            }
            Err(e) => {
                let err = HermesError::ConnectionFailure(format!("{:#}", e));
                error!("{}", err);
                Err(err.into())
            }
        }
    }

    fn build(credential: &Credential, api_url: Option<String>) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .context("Slack token contains characters not allowed in a header")?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = Client::builder()
            .user_agent("hermes-cli")
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        let api_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        debug!("Using Slack API at {}", api_url);

        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// `egg-logs` -> `#egg-logs`; names that already carry `#` are kept.
pub fn channel_target(channel: &str) -> String {
    if channel.starts_with('#') {
        channel.to_string()
    } else {
        format!("#{}", channel)
    }
}

#[async_trait]
impl PostMessage for SlackClient {
    #[tracing::instrument(skip(self, text))]
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostedMessage> {
        let url = format!("{}/chat.postMessage", self.api_url);
        let target = channel_target(channel);

        debug!("POST {} to {}...", url, target);

        let response = self
            .client
            .post(&url)
            .json(&PostMessageRequest {
                channel: &target,
                text,
            })
            .send()
            .await
            .map_err(classify_error)?;

        let response = response.error_for_status().map_err(classify_error)?;

        let body: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))?;

        if !body.ok {
            let code = body.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(DeliveryError::Api(code).into());
        }

        Ok(PostedMessage {
            channel: body.channel,
            ts: body.ts,
        })
    }
}
