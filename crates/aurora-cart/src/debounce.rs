//! # Debouncer
//!
//! Collapses bursts of calls into one: quantity steppers, search-as-you-type,
//! resize handlers.
//!
//! ```text
//! call ──┐  call ──┐  call ──┐
//!        ▼         ▼         ▼
//!   [wait....X][wait....X][wait..........] ──► action (last call only)
//!            aborted    aborted
//! ```
//!
//! Only the waiting phase is cancellable. Once the quiet period has passed the
//! action is spawned on its own task and runs to completion even if another
//! call arrives meanwhile.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Runs the most recent action once no new call has arrived for `wait`.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Debouncer {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// The quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedules `action`, replacing any call still waiting.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F, Fut>(&self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            tokio::spawn(action());
        });

        if let Some(previous) = self.pending().replace(handle) {
            trace!("Debounced call superseded");
            previous.abort();
        }
    }

    /// Drops the waiting call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending().take() {
            previous.abort();
        }
    }

    /// Returns true while a call is waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn recorder() -> (Arc<AtomicUsize>, Arc<Mutex<Vec<u32>>>) {
        (Arc::new(AtomicUsize::new(0)), Arc::new(Mutex::new(Vec::new())))
    }

    fn schedule(
        debouncer: &Debouncer,
        runs: &Arc<AtomicUsize>,
        seen: &Arc<Mutex<Vec<u32>>>,
        value: u32,
    ) {
        let runs = runs.clone();
        let seen = seen.clone();
        debouncer.call(move || async move {
            runs.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(value);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_only_last_call() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let (runs, seen) = recorder();

        schedule(&debouncer, &runs, &seen, 1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        schedule(&debouncer, &runs, &seen, 2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        schedule(&debouncer, &runs, &seen, 3);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![3]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let (runs, seen) = recorder();

        schedule(&debouncer, &runs, &seen, 1);
        tokio::time::sleep(Duration::from_millis(150)).await;
        schedule(&debouncer, &runs, &seen, 2);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_waiting_call() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let (runs, seen) = recorder();

        schedule(&debouncer, &runs, &seen, 1);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_pending());
    }
}
