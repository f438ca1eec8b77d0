use std::{fmt, sync::Arc};

use crate::{ContactError, ContactSubmission, OutgoingMessage, TransportFactory};

/// Mail delivery settings, resolved once at startup.
#[derive(Clone)]
pub struct MailSettings {
    pub smtp_host: String,
    pub sender: String,
    pub recipient: String,
    pub credential: Option<String>,
    /// Skip certificate and hostname checks on the STARTTLS upgrade.
    pub accept_invalid_certs: bool,
}

impl MailSettings {
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref().filter(|c| !c.is_empty())
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .field("credential", &self.credential().map(|_| "<redacted>"))
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Relays contact submissions to the site owner's inbox.
#[derive(Clone)]
pub struct ContactService {
    settings: MailSettings,
    transports: Arc<dyn TransportFactory>,
}

impl ContactService {
    pub fn new(settings: MailSettings, transports: Arc<dyn TransportFactory>) -> Self {
        Self {
            settings,
            transports,
        }
    }

    pub fn settings(&self) -> &MailSettings {
        &self.settings
    }

    /// Validates the submission and sends exactly one email for it.
    ///
    /// A transport failure is terminal: nothing is retried or queued.
    #[tracing::instrument(skip_all, fields(name = %submission.name.trim()))]
    pub async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactError> {
        let submission = submission.trimmed();
        submission.check()?;

        let Some(credential) = self.settings.credential() else {
            return Err(ContactError::ConfigurationMissing);
        };

        let transport = self.transports.connect(&self.settings, credential)?;
        transport.verify().await?;

        let message = OutgoingMessage::compose(&submission, &self.settings);
        transport.send(message).await?;

        tracing::info!("Contact request relayed");

        Ok(())
    }
}
