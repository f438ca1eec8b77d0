#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use starfall_client::{ApiError, ContactApi, ErrorSlot, FormView};
use starfall_contact::{ContactResponse, ContactSubmission};

pub const SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug)]
pub struct ViewState {
    pub errors: BTreeMap<ErrorSlot, String>,
    pub label: String,
    pub enabled: bool,
    pub resets: usize,
}

/// In-memory form, cloneable so the fake API can look at it mid-request.
#[derive(Clone)]
pub struct SharedView(pub Arc<Mutex<ViewState>>);

impl Default for SharedView {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(ViewState {
            errors: BTreeMap::new(),
            label: SUBMIT_LABEL.to_owned(),
            enabled: true,
            resets: 0,
        })))
    }
}

impl SharedView {
    pub fn errors(&self) -> BTreeMap<ErrorSlot, String> {
        self.0.lock().unwrap().errors.clone()
    }

    pub fn label(&self) -> String {
        self.0.lock().unwrap().label.clone()
    }

    pub fn enabled(&self) -> bool {
        self.0.lock().unwrap().enabled
    }

    pub fn resets(&self) -> usize {
        self.0.lock().unwrap().resets
    }
}

impl FormView for SharedView {
    fn show_error(&self, slot: ErrorSlot, message: &str) {
        self.0.lock().unwrap().errors.insert(slot, message.to_owned());
    }

    fn hide_errors(&self) {
        self.0.lock().unwrap().errors.clear();
    }

    fn submit_label(&self) -> String {
        self.label()
    }

    fn set_submit_label(&self, label: &str) {
        self.0.lock().unwrap().label = label.to_owned();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.0.lock().unwrap().enabled = enabled;
    }

    fn reset(&self) {
        self.0.lock().unwrap().resets += 1;
    }
}

#[derive(Clone)]
pub enum Reply {
    Response(ContactResponse),
    Status(StatusCode),
    Panic,
}

#[derive(Clone)]
pub struct ScriptedApi {
    pub reply: Reply,
    pub delay: Duration,
    pub view: SharedView,
    pub calls: Arc<AtomicUsize>,
    /// Label and enabled flag of the submit control seen during each call.
    pub seen: Arc<Mutex<Vec<(String, bool)>>>,
}

impl ScriptedApi {
    pub fn new(reply: Reply, view: &SharedView) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            view: view.clone(),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactApi for ScriptedApi {
    async fn send(&self, _submission: &ContactSubmission) -> Result<ContactResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((self.view.label(), self.view.enabled()));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Status(status) => Err(ApiError::Status(*status)),
            Reply::Panic => panic!("network stack exploded"),
        }
    }
}

pub fn fields() -> ContactSubmission {
    ContactSubmission {
        name: "Alice".to_owned(),
        company: String::new(),
        email: "alice@example.com".to_owned(),
        phone: String::new(),
        message: "Hi".to_owned(),
    }
}
