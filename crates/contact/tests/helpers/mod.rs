use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use starfall_contact::{
    ContactService, ContactSubmission, MailSettings, MailTransport, OutgoingMessage,
    TransportError, TransportFactory,
};

#[derive(Default)]
pub struct Recorded {
    pub connects: usize,
    pub verifies: usize,
    pub sent: Vec<OutgoingMessage>,
}

/// Transport factory that records every call instead of talking SMTP.
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

#[allow(dead_code)]
pub fn settings(credential: Option<&str>) -> MailSettings {
    MailSettings {
        smtp_host: "smtp.starfall.localhost".to_owned(),
        sender: "info@starfall.localhost".to_owned(),
        recipient: "info@starfall.localhost".to_owned(),
        credential: credential.map(str::to_owned),
        accept_invalid_certs: false,
    }
}

#[allow(dead_code)]
pub fn service(transports: &RecordingTransports, credential: Option<&str>) -> ContactService {
    ContactService::new(settings(credential), Arc::new(transports.clone()))
}

#[allow(dead_code)]
pub fn submission(name: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_owned(),
        company: String::new(),
        email: format!("{}@starfall.localhost", name.to_lowercase()),
        phone: String::new(),
        message: "my message".to_owned(),
    }
}
