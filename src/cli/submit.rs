use std::sync::Mutex;

use anyhow::{Result, bail};
use clap::Args;
use starfall_client::{
    ErrorSlot, FormController, FormView, HttpContactApi, NotificationCenter, SubmitOutcome,
    ToastEvent,
};
use starfall_contact::ContactSubmission;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Base URL of a running starfall server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub url: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub company: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<SubmitArgs> for ContactSubmission {
    fn from(args: SubmitArgs) -> Self {
        ContactSubmission {
            name: args.name,
            company: args.company,
            email: args.email,
            phone: args.phone,
            message: args.message,
        }
    }
}

/// The contact form rendered on a terminal.
struct TerminalView {
    label: Mutex<String>,
}

impl TerminalView {
    fn new() -> Self {
        Self {
            label: Mutex::new("Send Message".to_owned()),
        }
    }
}

impl FormView for TerminalView {
    fn show_error(&self, slot: ErrorSlot, message: &str) {
        eprintln!("  {slot}: {message}");
    }

    fn hide_errors(&self) {}

    fn submit_label(&self) -> String {
        self.label
            .lock()
            .map(|label| label.clone())
            .unwrap_or_default()
    }

    fn set_submit_label(&self, label: &str) {
        if let Ok(mut current) = self.label.lock() {
            *current = label.to_owned();
        }
        tracing::debug!(label, "submit control");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "submit control");
    }

    fn reset(&self) {
        tracing::debug!("form reset");
    }
}

/// Sends one contact submission through the form controller.
pub async fn submit(args: SubmitArgs) -> Result<()> {
    let api = HttpContactApi::new(&args.url);
    tracing::info!(endpoint = api.endpoint(), "Submitting contact form");

    let notifications = NotificationCenter::new();
    let mut events = notifications.subscribe();
    let controller = FormController::new(api, TerminalView::new(), notifications);

    let outcome = controller.on_submit(args.into()).await;

    while let Ok(event) = events.try_recv() {
        if let ToastEvent::Added(toast) = event {
            println!("[{}] {}\n{}", toast.kind, toast.title, toast.message);
        }
    }

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid(errors) => bail!("form has {} invalid field(s)", errors.len()),
        SubmitOutcome::Busy => bail!("a submission is already in flight"),
        SubmitOutcome::Failed => bail!("contact submission failed"),
    }
}
