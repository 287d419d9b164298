//! Error kinds surfaced by hermes.
//!
//! Everything travels as `anyhow::Error`; use `downcast_ref::<HermesError>()`
//! to tell the kinds apart.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum HermesError {
    /// The token file does not exist.
    MissingCredentialFile { path: PathBuf },
    /// The token is empty or lacks the required prefix.
    MalformedCredential { reason: String },
    /// The Slack client could not be constructed. Never retried.
    ConnectionFailure(String),
    /// Every delivery attempt failed.
    SendFailure { channel: String, attempts: usize },
}

impl fmt::Display for HermesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HermesError::MissingCredentialFile { path } => {
                write!(
                    f,
                    "Slack token file not found: {}. Create it or set HERMES_SLACK_TOKEN.",
                    path.display()
                )
            }
            HermesError::MalformedCredential { reason } => {
                write!(f, "Malformed Slack token: {}", reason)
            }
            HermesError::ConnectionFailure(reason) => {
                write!(f, "Connect to slack - Unsuccessful: {}", reason)
            }
            HermesError::SendFailure { channel, attempts } => {
                write!(
                    f,
                    "Sending message to {} - Unsuccessful: couldn't send message after {} tries",
                    channel, attempts
                )
            }
        }
    }
}

impl std::error::Error for HermesError {}
