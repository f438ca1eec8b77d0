use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use starfall_contact::{ContactResponse, ContactSubmission};

use crate::{
    error::ApiError,
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        current_path: "/contact",
    })
}

/// POST /api/contact
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match input {
        Ok(input) => input,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match app_state.contact.submit(submission).await {
        Ok(()) => Json(ContactResponse::sent()).into_response(),
        Err(err) => ApiError::contact(err, app_state.config.environment).into_response(),
    }
}
