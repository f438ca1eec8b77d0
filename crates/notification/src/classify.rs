use std::{error::Error, io};

use lettre::transport::smtp;
use starfall_contact::{TransportError, TransportErrorKind};

/// SMTP reply codes that mean the server refused our credentials.
const AUTHENTICATION_CODES: [&str; 4] = ["530", "534", "535", "538"];

/// Maps a lettre SMTP error onto the transport error taxonomy.
pub fn classify(err: &smtp::Error) -> TransportError {
    let status = err.status().map(|code| code.to_string());
    let kind = kind_of(err.is_timeout(), status.as_deref(), io_error_kind(err));

    TransportError::new(kind, err.to_string())
}

fn io_error_kind(err: &(dyn Error + 'static)) -> Option<io::ErrorKind> {
    let mut source = err.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        source = err.source();
    }

    None
}

fn kind_of(
    timed_out: bool,
    status: Option<&str>,
    io_kind: Option<io::ErrorKind>,
) -> TransportErrorKind {
    if timed_out || io_kind == Some(io::ErrorKind::TimedOut) {
        return TransportErrorKind::TimedOut;
    }

    if status.is_some_and(|code| AUTHENTICATION_CODES.contains(&code)) {
        return TransportErrorKind::AuthenticationFailed;
    }

    if io_kind.is_some() {
        return TransportErrorKind::ConnectionFailed;
    }

    TransportErrorKind::Unknown
}
