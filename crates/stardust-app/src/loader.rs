//! One-shot asynchronous acquisition of the graphics library.
//!
//! The fetch runs on a worker thread; its result is handed to a notify
//! callback (in production, an event-loop proxy) and applied back on the
//! event-loop thread with [`LibraryLoader::complete`]. A failed load is
//! permanent: there is no retry.

use std::sync::Arc;

use tracing::{info, warn};

/// Where the loader is in its single load attempt.
#[derive(Debug)]
pub enum LoadStatus<L> {
    Idle,
    Loading,
    Ready(Arc<L>),
    Failed(String),
}

/// Outcome of asking for the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSignal {
    /// The library is available now.
    Ready,
    /// A load is in flight; completion will be delivered later.
    Pending,
    /// The load failed and will not be retried.
    Failed,
}

/// Resolves the library once and caches it.
#[derive(Debug)]
pub struct LibraryLoader<L> {
    status: LoadStatus<L>,
}

impl<L> Default for LibraryLoader<L> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
        }
    }
}

impl<L: Send + Sync + 'static> LibraryLoader<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader whose library is already present; no fetch will ever run.
    pub fn preloaded(library: Arc<L>) -> Self {
        Self {
            status: LoadStatus::Ready(library),
        }
    }

    /// Signal readiness, starting the fetch on first call.
    ///
    /// `fetch` runs on a worker thread and its result is passed to
    /// `notify` on that same thread. Neither runs if the library is
    /// already loaded, a load is in flight, or a previous load failed.
    pub fn ensure_loaded<F, N>(&mut self, fetch: F, notify: N) -> LoadSignal
    where
        F: FnOnce() -> Result<L, String> + Send + 'static,
        N: FnOnce(Result<Arc<L>, String>) + Send + 'static,
    {
        match self.status {
            LoadStatus::Ready(_) => return LoadSignal::Ready,
            LoadStatus::Loading => return LoadSignal::Pending,
            LoadStatus::Failed(_) => return LoadSignal::Failed,
            LoadStatus::Idle => {}
        }

        let spawned = std::thread::Builder::new()
            .name("graphics-loader".into())
            .spawn(move || notify(fetch().map(Arc::new)));

        match spawned {
            Ok(_) => {
                info!("Loading graphics library");
                self.status = LoadStatus::Loading;
                LoadSignal::Pending
            }
            Err(e) => {
                let reason = format!("failed to spawn loader thread: {e}");
                warn!("Graphics library unavailable: {reason}");
                self.status = LoadStatus::Failed(reason);
                LoadSignal::Failed
            }
        }
    }

    /// Apply a finished load. A library that is already cached is kept.
    pub fn complete(&mut self, result: Result<Arc<L>, String>) -> LoadSignal {
        if let LoadStatus::Ready(_) = self.status {
            return LoadSignal::Ready;
        }
        match result {
            Ok(library) => {
                info!("Graphics library ready");
                self.status = LoadStatus::Ready(library);
                LoadSignal::Ready
            }
            Err(reason) => {
                warn!("Graphics library failed to load, effect disabled: {reason}");
                self.status = LoadStatus::Failed(reason);
                LoadSignal::Failed
            }
        }
    }

    pub fn library(&self) -> Option<Arc<L>> {
        match &self.status {
            LoadStatus::Ready(library) => Some(Arc::clone(library)),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status, LoadStatus::Ready(_))
    }

    pub fn status(&self) -> &LoadStatus<L> {
        &self.status
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct FakeLibrary(&'static str);

    type Delivery = mpsc::Receiver<Result<Arc<FakeLibrary>, String>>;

    fn start(
        loader: &mut LibraryLoader<FakeLibrary>,
        calls: &Arc<AtomicUsize>,
        outcome: Result<&'static str, &'static str>,
    ) -> (LoadSignal, Delivery) {
        let (tx, rx) = mpsc::channel();
        let calls = Arc::clone(calls);
        let signal = loader.ensure_loaded(
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                outcome.map(FakeLibrary).map_err(String::from)
            },
            move |result| {
                let _ = tx.send(result);
            },
        );
        (signal, rx)
    }

    fn receive(rx: &Delivery) -> Result<Arc<FakeLibrary>, String> {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn first_call_starts_load_and_caches_result() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loader = LibraryLoader::new();

        let (signal, rx) = start(&mut loader, &calls, Ok("gpu"));
        assert_eq!(signal, LoadSignal::Pending);
        assert!(!loader.is_ready());

        assert_eq!(loader.complete(receive(&rx)), LoadSignal::Ready);
        assert_eq!(loader.library().as_deref(), Some(&FakeLibrary("gpu")));

        let (again, _rx) = start(&mut loader, &calls, Ok("other"));
        assert_eq!(again, LoadSignal::Ready);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn in_flight_load_is_not_restarted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loader = LibraryLoader::new();

        let (_, rx) = start(&mut loader, &calls, Ok("gpu"));
        let (second, _) = start(&mut loader, &calls, Ok("gpu"));
        assert_eq!(second, LoadSignal::Pending);

        receive(&rx).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_is_permanent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loader = LibraryLoader::new();

        let (_, rx) = start(&mut loader, &calls, Err("no adapter"));
        assert_eq!(loader.complete(receive(&rx)), LoadSignal::Failed);
        assert!(matches!(loader.status(), LoadStatus::Failed(r) if r == "no adapter"));

        let (again, _) = start(&mut loader, &calls, Ok("gpu"));
        assert_eq!(again, LoadSignal::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(loader.library().is_none());
    }

    #[test]
    fn preloaded_library_signals_ready_without_fetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut loader = LibraryLoader::preloaded(Arc::new(FakeLibrary("ambient")));
        let (signal, _) = start(&mut loader, &calls, Ok("gpu"));
        assert_eq!(signal, LoadSignal::Ready);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn late_completion_keeps_cached_library() {
        let mut loader = LibraryLoader::preloaded(Arc::new(FakeLibrary("first")));
        assert_eq!(loader.complete(Err("late".into())), LoadSignal::Ready);
        assert_eq!(loader.library().as_deref(), Some(&FakeLibrary("first")));
    }
}
