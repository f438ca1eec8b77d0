pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

use std::sync::Arc;

use starfall_contact::{ContactService, TransportFactory};

pub use routes::AppState;

/// Create app router
///
/// The mail transport factory is injected so integration tests can run the
/// full router without an SMTP server.
pub fn create_app(config: config::Config, transports: Arc<dyn TransportFactory>) -> axum::Router {
    let contact = ContactService::new(config.mail_settings(), transports);

    routes::router(AppState { config, contact })
}
