use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::view::lifecycle::ViewHandle;

/// Runs view-owned fetches, applying each result only while the
/// spawning generation is still current.
///
/// A view fires its mount-time fetches through one scope; fetches
/// complete in any order, and any completion arriving after
/// `deactivate()` (or after a remount) is dropped on the floor.
pub struct ViewScope {
    handle: ViewHandle,
}

impl ViewScope {
    pub fn new(handle: ViewHandle) -> Self {
        Self { handle }
    }

    /// Spawn `fetch`; when it resolves, call `apply` with the output —
    /// unless the view has been torn down or remounted in the
    /// meantime, in which case the result is discarded.
    pub fn spawn_fetch<F, T, A>(&self, label: &'static str, fetch: F, apply: A) -> JoinHandle<()>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        A: FnOnce(T) + Send + 'static,
    {
        let handle = self.handle.clone();
        let generation = handle.generation();
        tokio::spawn(async move {
            let output = fetch.await;
            if handle.is_current(generation) {
                apply(output);
            } else {
                debug!(label, generation, "discarding stale fetch result");
            }
        })
    }
}
