//! Composite subscription: everything a bound view releases in one call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Owns the tasks of one view activation and releases them together.
pub struct Disposables {
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Disposables {
    pub fn new() -> Self {
        Self {
            disposed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Track a task. Adding to an already disposed set aborts it right away.
    pub fn add(&self, task: JoinHandle<()>) {
        if self.is_disposed() {
            task.abort();
            return;
        }
        self.tasks.lock().push(task);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Release everything. Returns `false` if already disposed.
    pub fn dispose(&self) -> bool {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        let tasks = std::mem::take(&mut *self.tasks.lock());
        tracing::debug!(tasks = tasks.len(), "Disposing subscriptions");
        for task in tasks {
            task.abort();
        }
        true
    }

    /// Create a handle for sharing with tasks
    pub fn handle(&self) -> DisposeHandle {
        DisposeHandle {
            disposed: Arc::clone(&self.disposed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for Disposables {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Disposables {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Lightweight handle for observing disposal
#[derive(Clone)]
pub struct DisposeHandle {
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl DisposeHandle {
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise a dispose()
        // landing between the two would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_disposed() {
            return;
        }
        notified.await;
    }
}
