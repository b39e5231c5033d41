use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Lifecycle of a routed view, modeled explicitly so fetch-cancellation
/// and timer teardown stay deterministic outside any UI framework.
///
/// `activate` opens a generation; `deactivate` closes it. Work started
/// under a generation checks it is still current before applying its
/// result, so responses landing after teardown are discarded instead of
/// mutating a destroyed view.
pub struct ViewLifecycle {
    active: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    notify: Arc<Notify>,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Mount the view: starts a fresh generation.
    pub fn activate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.active.store(true, Ordering::SeqCst);
    }

    /// Unmount the view. Pending fetch results from the closed
    /// generation will be discarded; waiting tasks are woken.
    pub fn deactivate(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn handle(&self) -> ViewHandle {
        ViewHandle {
            active: Arc::clone(&self.active),
            generation: Arc::clone(&self.generation),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle shared with fetch tasks and the autoplay driver.
#[derive(Clone)]
pub struct ViewHandle {
    active: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    notify: Arc<Notify>,
}

impl ViewHandle {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Generation to capture when starting work on behalf of the view.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether work started under `generation` may still apply its
    /// result: the view is active and has not been remounted since.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_active() && self.generation() == generation
    }

    /// Wait until the view is deactivated.
    pub async fn wait_deactivated(&self) {
        // Subscribe to Notify BEFORE checking the flag: deactivate()
        // firing between the check and the await would otherwise have
        // no subscriber and the wakeup would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_active() {
            return;
        }
        notified.await;
    }
}
