use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use starfall_contact::{ContactError, ContactResponse, ErrorKind};
use thiserror::Error;

use crate::config::Environment;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("{error}")]
    Contact {
        error: ContactError,
        expose_detail: bool,
    },
}

impl ApiError {
    /// Transport details are only sent back outside production.
    pub fn contact(error: ContactError, environment: Environment) -> Self {
        ApiError::Contact {
            error,
            expose_detail: !environment.is_production(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "Rejected contact request body");

                (
                    StatusCode::BAD_REQUEST,
                    ContactResponse::failed(INVALID_BODY_MESSAGE, None),
                )
            }
            ApiError::Contact {
                error,
                expose_detail,
            } => {
                let kind = error.kind();
                let status = if error.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };

                match kind {
                    ErrorKind::MissingFields | ErrorKind::InvalidEmail => {
                        tracing::warn!(kind = %kind, "Contact submission rejected");
                    }
                    ErrorKind::ConfigurationMissing => {
                        tracing::error!(
                            kind = %kind,
                            "Email credential not set, cannot send contact email"
                        );
                    }
                    _ => {
                        tracing::error!(
                            kind = %kind,
                            detail = error.detail().unwrap_or_default(),
                            "Failed to send contact email"
                        );
                    }
                }

                let detail = if expose_detail {
                    error.detail().map(str::to_owned)
                } else {
                    None
                };

                (status, ContactResponse::failed(error.message(), detail))
            }
        };

        (status, Json(body)).into_response()
    }
}
