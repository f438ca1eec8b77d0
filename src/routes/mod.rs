use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use starfall_contact::ContactService;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod pages;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: ContactService,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/", get(pages::index))
        .route("/privacy", get(pages::privacy))
        .route("/contact", get(contact::page))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
