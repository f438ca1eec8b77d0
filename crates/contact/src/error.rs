use strum::{AsRefStr, Display};

use crate::{TransportError, TransportErrorKind};

pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Email is not in correct format.";
pub const CONFIGURATION_MISSING_MESSAGE: &str = "Email service not configured.";
pub const AUTHENTICATION_FAILED_MESSAGE: &str =
    "Email authentication failed. Please check email credentials.";
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not connect to email server.";
pub const TIMED_OUT_MESSAGE: &str = "Email server connection timed out.";
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Failed to send email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    MissingFields,
    InvalidEmail,
    ConfigurationMissing,
    AuthenticationFailed,
    ConnectionFailed,
    TimedOut,
    UnknownFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("name, email and message are required")]
    MissingFields,

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("mail transport credential is not configured")]
    ConfigurationMissing,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ContactError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields => ErrorKind::MissingFields,
            Self::InvalidEmail => ErrorKind::InvalidEmail,
            Self::ConfigurationMissing => ErrorKind::ConfigurationMissing,
            Self::Transport(err) => match err.kind {
                TransportErrorKind::AuthenticationFailed => ErrorKind::AuthenticationFailed,
                TransportErrorKind::ConnectionFailed => ErrorKind::ConnectionFailed,
                TransportErrorKind::TimedOut => ErrorKind::TimedOut,
                TransportErrorKind::Unknown => ErrorKind::UnknownFailure,
            },
        }
    }

    /// Message safe to show to the visitor.
    pub fn message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::MissingFields => MISSING_FIELDS_MESSAGE,
            ErrorKind::InvalidEmail => INVALID_EMAIL_MESSAGE,
            ErrorKind::ConfigurationMissing => CONFIGURATION_MISSING_MESSAGE,
            ErrorKind::AuthenticationFailed => AUTHENTICATION_FAILED_MESSAGE,
            ErrorKind::ConnectionFailed => CONNECTION_FAILED_MESSAGE,
            ErrorKind::TimedOut => TIMED_OUT_MESSAGE,
            ErrorKind::UnknownFailure => UNKNOWN_FAILURE_MESSAGE,
        }
    }

    /// Input errors the visitor can fix by editing the form.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidEmail)
    }

    /// Raw transport diagnostics, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Transport(err) => Some(&err.detail),
            _ => None,
        }
    }
}
