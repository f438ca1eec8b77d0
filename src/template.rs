use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};
use time::OffsetDateTime;

pub(crate) mod filters {
    /// Footer copyright line, `© 2026 Starfall Web Design`.
    #[askama::filter_fn]
    pub fn copyright(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let year = askama::get_value::<i32>(values, "year")?;

        Ok(format!("© {year} {value}"))
    }
}

pub struct Template {
    pub year: i32,
}

impl Template {
    pub fn new() -> Self {
        Self {
            year: OffsetDateTime::now_utc().year(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("year", Box::new(self.year));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template::new())
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
