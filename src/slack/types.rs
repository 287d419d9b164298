use serde::{Deserialize, Serialize};

/// Body of a `chat.postMessage` call.
#[derive(Debug, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

/// Slack answers HTTP 200 for most API errors and reports them via `ok`.
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub channel: Option<String>,
    pub ts: Option<String>,
}

/// A message Slack accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostedMessage {
    pub channel: Option<String>,
    pub ts: Option<String>,
}
