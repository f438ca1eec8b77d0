//! SMTP mail transport using lettre

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use starfall_contact::{
    MailSettings, MailTransport, OutgoingMessage, SUBMISSION_PORT, TransportError,
    TransportErrorKind, TransportFactory,
};

use crate::classify;

/// Builds one authenticated STARTTLS transport per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransports;

impl TransportFactory for SmtpTransports {
    fn connect(
        &self,
        settings: &MailSettings,
        credential: &str,
    ) -> Result<Box<dyn MailTransport>, TransportError> {
        if settings.accept_invalid_certs {
            tracing::warn!(
                smtp_host = %settings.smtp_host,
                "SMTP certificate verification disabled by configuration"
            );
        }

        let tls = TlsParameters::builder(settings.smtp_host.to_owned())
            .dangerous_accept_invalid_certs(settings.accept_invalid_certs)
            .dangerous_accept_invalid_hostnames(settings.accept_invalid_certs)
            .build()
            .map_err(|err| classify(&err))?;

        let creds = Credentials::new(settings.sender.to_owned(), credential.to_owned());

        // The connection itself is opened lazily by verify/send.
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.smtp_host)
            .port(SUBMISSION_PORT)
            .tls(Tls::Required(tls))
            .credentials(creds)
            .build();

        tracing::debug!(
            smtp_host = %settings.smtp_host,
            smtp_port = SUBMISSION_PORT,
            "SMTP transport created"
        );

        Ok(Box::new(SmtpTransport { mailer }))
    }
}

pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn verify(&self) -> Result<(), TransportError> {
        match self.mailer.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(TransportError::new(
                TransportErrorKind::ConnectionFailed,
                "SMTP server did not answer the connection test",
            )),
            Err(err) => Err(classify(&err)),
        }
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        tracing::info!(subject = %message.subject, "Sending email text plain");

        let email = build_message(&message)?;
        self.mailer.send(email).await.map_err(|err| classify(&err))?;

        Ok(())
    }
}

/// Turns a composed contact message into a plain-text lettre message.
pub fn build_message(message: &OutgoingMessage) -> Result<Message, TransportError> {
    let from: Mailbox = message.from.parse().map_err(|err| {
        TransportError::new(
            TransportErrorKind::Unknown,
            format!("invalid sender address: {err}"),
        )
    })?;

    let to: Mailbox = message.to.parse().map_err(|err| {
        TransportError::new(
            TransportErrorKind::Unknown,
            format!("invalid recipient address: {err}"),
        )
    })?;

    let mut builder = Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.to_owned())
        .header(ContentType::TEXT_PLAIN);

    if let Some(reply_to) = &message.reply_to {
        match reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(err) => tracing::warn!(
                error = %err,
                reply_to = %reply_to,
                "Reply-To address rejected, sending without it"
            ),
        }
    }

    builder.body(message.body.to_owned()).map_err(|err| {
        TransportError::new(
            TransportErrorKind::Unknown,
            format!("failed to build message: {err}"),
        )
    })
}
