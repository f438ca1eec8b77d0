use crate::{ContactSubmission, MailSettings};

/// Placeholder used for optional fields left blank.
///
/// Company and phone both use it. The company line sits between the client
/// name and the e-mail line; the other fields keep the name, e-mail, phone,
/// message order.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

impl OutgoingMessage {
    pub fn compose(submission: &ContactSubmission, settings: &MailSettings) -> Self {
        Self {
            from: settings.sender.to_owned(),
            to: settings.recipient.to_owned(),
            reply_to: Some(submission.email.to_owned()),
            subject: format!("Contact Request from {}", submission.name),
            body: format!(
                "Contact request from the website. Reply to the client by writing to the e-mail address below.\n\
                 \n\
                 Client Name: {}\n\
                 Company: {}\n\
                 E-Mail: {}\n\
                 Phone: {}\n\
                 \n\
                 Message:\n\
                 {}\n",
                submission.name,
                or_placeholder(&submission.company),
                submission.email,
                or_placeholder(&submission.phone),
                submission.message,
            ),
        }
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}
