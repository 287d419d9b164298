//! Description of a failed delivery attempt.
//!
//! The kinds only shape the log text; the sender retries all of them alike.

use reqwest::StatusCode;

#[derive(Debug, PartialEq, Eq)]
pub enum DeliveryError {
    /// Connection refused, DNS failure, TLS error, reset...
    Transport(String),
    /// HTTP 429
    RateLimited,
    /// Any other non-2xx status
    Status(u16),
    /// Slack returned `"ok": false`
    Api(String),
    /// The body was not a `chat.postMessage` response
    InvalidResponse(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DeliveryError::RateLimited => write!(f, "Rate limited by Slack (HTTP 429)"),
            DeliveryError::Status(code) => write!(f, "HTTP {} error", code),
            DeliveryError::Api(code) => match code.as_str() {
                "invalid_auth" | "not_authed" | "token_revoked" | "account_inactive" => {
                    write!(f, "Slack API error: {}. Check your Slack token.", code)
                }
                "channel_not_found" | "not_in_channel" => {
                    write!(
                        f,
                        "Slack API error: {}. Is the bot invited to the channel?",
                        code
                    )
                }
                _ => write!(f, "Slack API error: {}", code),
            },
            DeliveryError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// Maps a reqwest failure onto a [`DeliveryError`].
pub fn classify_error(error: reqwest::Error) -> DeliveryError {
    if let Some(status) = error.status() {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return DeliveryError::RateLimited;
        }
        return DeliveryError::Status(status.as_u16());
    }

    if error.is_decode() {
        return DeliveryError::InvalidResponse(error.to_string());
    }

    DeliveryError::Transport(error.to_string())
}
