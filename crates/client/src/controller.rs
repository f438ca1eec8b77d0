use std::sync::atomic::{AtomicBool, Ordering};

use starfall_contact::ContactSubmission;

use crate::{
    ContactApi, DEFAULT_DURATION, FormErrors, FormView, NotificationCenter, ToastKind, validate,
};

/// Submit button label while a request is in flight.
pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message. We got it and will contact you within 2 business days.";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(FormErrors),
    /// Another submission is still in flight.
    Busy,
    Sent,
    Failed,
}

/// Drives one contact form: validation, busy state and outcome toasts.
///
/// At most one submission is in flight per controller.
pub struct FormController<A, V> {
    api: A,
    view: V,
    notifications: NotificationCenter,
    submitting: AtomicBool,
}

impl<A: ContactApi, V: FormView> FormController<A, V> {
    pub fn new(api: A, view: V, notifications: NotificationCenter) -> Self {
        Self {
            api,
            view,
            notifications,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Handles the form's submit event.
    pub async fn on_submit(&self, fields: ContactSubmission) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }

        let fields = fields.trimmed();

        self.clear_errors();

        let errors = validate(&fields);
        if !errors.is_valid() {
            for (slot, message) in errors.iter() {
                self.view.show_error(slot, message);
            }

            return SubmitOutcome::Invalid(errors);
        }

        self.submit(&fields).await
    }

    pub fn clear_errors(&self) {
        self.view.hide_errors();
    }

    /// Posts already validated fields and reports the outcome as a toast.
    pub async fn submit(&self, fields: &ContactSubmission) -> SubmitOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.submitting, &self.view) else {
            tracing::debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        };

        match self.api.send(fields).await {
            Ok(response) if response.success => {
                self.notifications.notify(
                    SUCCESS_TITLE,
                    SUCCESS_MESSAGE,
                    ToastKind::Success,
                    DEFAULT_DURATION,
                );
                self.view.reset();

                SubmitOutcome::Sent
            }
            Ok(response) => {
                tracing::warn!(message = %response.message, "Contact submission rejected");
                self.notify_failure();

                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::error!(error = %err, "Contact submission failed");
                self.notify_failure();

                SubmitOutcome::Failed
            }
        }
    }

    fn notify_failure(&self) {
        self.notifications
            .notify(ERROR_TITLE, ERROR_MESSAGE, ToastKind::Error, DEFAULT_DURATION);
    }
}

/// Holds the submit control busy; dropping it restores the original label
/// and re-enables the control on every exit path.
struct BusyGuard<'a, V: FormView> {
    flag: &'a AtomicBool,
    view: &'a V,
    label: String,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn acquire(flag: &'a AtomicBool, view: &'a V) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let label = view.submit_label();
        view.set_submit_label(PENDING_LABEL);
        view.set_submit_enabled(false);

        Some(Self { flag, view, label })
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_label(&self.label);
        self.view.set_submit_enabled(true);
        self.flag.store(false, Ordering::Release);
    }
}
