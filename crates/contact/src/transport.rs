use async_trait::async_trait;
use strum::{AsRefStr, Display};

use crate::{MailSettings, OutgoingMessage};

/// Mail submission port used for every delivery.
pub const SUBMISSION_PORT: u16 = 587;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TransportErrorKind {
    AuthenticationFailed,
    ConnectionFailed,
    TimedOut,
    Unknown,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub detail: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// A connected mail transport, built for a single request.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Checks that the server is reachable and accepts our credentials.
    async fn verify(&self) -> Result<(), TransportError>;

    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError>;
}

pub trait TransportFactory: Send + Sync {
    fn connect(
        &self,
        settings: &MailSettings,
        credential: &str,
    ) -> Result<Box<dyn MailTransport>, TransportError>;
}
