use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: &'static str,
}

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub current_path: &'static str,
}

pub async fn index(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate { current_path: "/" })
}

pub async fn privacy(template: Template) -> impl IntoResponse {
    template.render(PrivacyTemplate {
        current_path: "/privacy",
    })
}
