use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use strum::{AsRefStr, Display};
use tokio::sync::broadcast::{self, error::RecvError};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);
/// Delay before a new toast plays its entry transition.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Length of the exit transition; the toast is removed afterwards.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Added(Toast),
    Shown(ToastId),
    Hiding(ToastId),
    Removed(ToastId),
}

struct Inner {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    events: broadcast::Sender<ToastEvent>,
}

/// Owns every toast of a page. Construct it once and share the handle;
/// clones refer to the same container.
///
/// Each toast runs on its own timers, so dismissing or expiring one never
/// affects another. Timers are tokio tasks: call from within a runtime.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);

        Self {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                events,
            }),
        }
    }

    /// Queues a toast. A zero `duration` keeps it until [`Self::dismiss`].
    pub fn notify(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast {
            id,
            title: title.into(),
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        };

        self.lock().push(toast.clone());
        self.emit(ToastEvent::Added(toast));

        let center = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ENTER_DELAY).await;
            center.show(id);
        });

        if !duration.is_zero() {
            let center = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                center.dismiss(id);
            });
        }

        id
    }

    /// Starts the exit transition. Returns false if the toast is already
    /// leaving or gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let started = {
            let mut toasts = self.lock();
            match toasts.iter_mut().find(|toast| toast.id == id) {
                Some(toast) if toast.phase != ToastPhase::Leaving => {
                    toast.phase = ToastPhase::Leaving;
                    true
                }
                _ => false,
            }
        };

        if !started {
            return false;
        }

        self.emit(ToastEvent::Hiding(id));

        let center = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(EXIT_DURATION).await;
            center.remove(id);
        });

        true
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.lock().iter().find(|toast| toast.id == id).cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Resolves once no toast is left in the container.
    pub async fn drained(&self) {
        let mut events = self.subscribe();

        loop {
            if self.lock().is_empty() {
                return;
            }

            match events.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return,
            }
        }
    }

    fn show(&self, id: ToastId) {
        let shown = {
            let mut toasts = self.lock();
            match toasts.iter_mut().find(|toast| toast.id == id) {
                Some(toast) if toast.phase == ToastPhase::Entering => {
                    toast.phase = ToastPhase::Visible;
                    true
                }
                _ => false,
            }
        };

        if shown {
            self.emit(ToastEvent::Shown(id));
        }
    }

    fn remove(&self, id: ToastId) {
        let removed = {
            let mut toasts = self.lock();
            let position = toasts.iter().position(|toast| toast.id == id);
            position.map(|position| toasts.remove(position)).is_some()
        };

        if removed {
            self.emit(ToastEvent::Removed(id));
        }
    }

    fn emit(&self, event: ToastEvent) {
        // No subscriber is fine.
        let _ = self.inner.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.inner
            .toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
