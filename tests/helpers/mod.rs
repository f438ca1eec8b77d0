//! Router setup with a recording mail transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use starfall::config::{Config, EmailConfig, Environment, ObservabilityConfig, ServerConfig};
use starfall_contact::{
    MailSettings, MailTransport, OutgoingMessage, TransportError, TransportFactory,
};
use tower::ServiceExt;

#[derive(Default)]
pub struct Recorded {
    pub connects: usize,
    pub verifies: usize,
    pub sent: Vec<OutgoingMessage>,
}

#[derive(Clone, Default)]
pub struct RecordingTransports {
    pub recorded: Arc<Mutex<Recorded>>,
    pub verify_error: Option<TransportError>,
    pub send_error: Option<TransportError>,
}

struct RecordingTransport(RecordingTransports);

impl TransportFactory for RecordingTransports {
    fn connect(
        &self,
        _settings: &MailSettings,
        _credential: &str,
    ) -> Result<Box<dyn MailTransport>, TransportError> {
        self.recorded.lock().unwrap().connects += 1;

        Ok(Box::new(RecordingTransport(self.clone())))
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn verify(&self) -> Result<(), TransportError> {
        self.0.recorded.lock().unwrap().verifies += 1;

        match &self.0.verify_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        if let Some(err) = &self.0.send_error {
            return Err(err.clone());
        }

        self.0.recorded.lock().unwrap().sent.push(message);

        Ok(())
    }
}

pub fn config(environment: Environment, credential: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            credential: credential.map(str::to_owned),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
        environment,
    }
}

pub struct TestApp {
    pub router: Router,
    pub transports: RecordingTransports,
}

impl TestApp {
    pub fn new(config: Config, transports: RecordingTransports) -> Self {
        let router = starfall::create_app(config, Arc::new(transports.clone()));

        Self { router, transports }
    }

    /// Development mode with a credential set.
    pub fn configured() -> Self {
        Self::new(
            config(Environment::Development, Some("app-password")),
            RecordingTransports::default(),
        )
    }

    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.transports.recorded.lock().unwrap()
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;

        self.send(request).await
    }

    pub async fn post_contact(&self, body: &str) -> anyhow::Result<(StatusCode, String)> {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))?;

        self.send(request).await
    }

    pub async fn post_contact_json(
        &self,
        body: serde_json::Value,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let (status, body) = self.post_contact(&body.to_string()).await?;

        Ok((status, serde_json::from_str(&body)?))
    }

    async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, String)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        Ok((status, String::from_utf8(body.to_vec())?))
    }
}

pub fn submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "company": "Acme",
        "email": "jane@acme.test",
        "phone": "",
        "message": "We need a new website."
    })
}
