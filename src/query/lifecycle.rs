use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;

use super::{QueryBackend, RequestState};

const INTERRUPTED: &str = "Request was interrupted";

/// Whether the view that owns a lifecycle is still around.
///
/// Once unmounted, late responses are dropped instead of being applied.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// What a call to [`QueryLifecycle::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, nothing happened.
    Skipped,
    /// Another request is in flight, nothing happened.
    Busy,
    /// The view went away before the response arrived; state untouched.
    Discarded,
    /// The request finished and its outcome was published.
    Completed,
}

/// Owns the request state and is its only writer.
///
/// Each submission moves the state to `Loading` and then to exactly one of
/// `Success` or `Failure`. At most one request is in flight at a time.
pub struct QueryLifecycle<B> {
    backend: B,
    state: watch::Sender<RequestState>,
    liveness: Liveness,
}

impl<B> QueryLifecycle<B> {
    pub fn new(backend: B) -> Self {
        Self::with_liveness(backend, Liveness::new())
    }

    pub fn with_liveness(backend: B, liveness: Liveness) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            backend,
            state,
            liveness,
        }
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Clears a finished result back to `Idle`. No effect while loading.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if state.is_loading() || *state == RequestState::Idle {
                return false;
            }
            *state = RequestState::Idle;
            true
        });
    }
}

impl<B: QueryBackend> QueryLifecycle<B> {
    pub async fn submit(&self, text: &str) -> Submission {
        if text.trim().is_empty() {
            return Submission::Skipped;
        }
        if !self.liveness.is_live() {
            return Submission::Discarded;
        }

        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = RequestState::Loading;
            true
        });
        if !started {
            debug!("query ignored, another one is in flight");
            return Submission::Busy;
        }

        info!(query = text; "submitting query");
        let guard = LoadingGuard {
            state: &self.state,
            liveness: &self.liveness,
            armed: true,
        };

        let outcome = self.backend.fetch(text).await;

        if !self.liveness.is_live() {
            debug!("view unmounted, dropping query response");
            guard.disarm();
            return Submission::Discarded;
        }

        let next = match outcome {
            Ok(result) => {
                info!("query returned {} rows", result.records().len());
                RequestState::Success(result)
            }
            Err(err) => {
                warn!(error:% = err; "query failed");
                RequestState::Failure(err.user_message())
            }
        };
        guard.finish(next);
        Submission::Completed
    }
}

/// Leaves `Loading` even if the submit future is dropped or unwinds.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    liveness: &'a Liveness,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, next: RequestState) {
        self.armed = false;
        self.state.send_replace(next);
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.liveness.is_live() {
            return;
        }
        self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = RequestState::Failure(INTERRUPTED.to_string());
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::core::InsightError;
    use crate::query::QueryResult;

    /// Replays canned outcomes and records every query it receives.
    struct ScriptedBackend {
        outcomes: Mutex<Vec<Result<QueryResult, InsightError>>>,
        received: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(mut outcomes: Vec<Result<QueryResult, InsightError>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                received: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QueryBackend for ScriptedBackend {
        async fn fetch(&self, text: &str) -> Result<QueryResult, InsightError> {
            self.received.lock().unwrap().push(text.to_string());
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(InsightError::NetworkError("script exhausted".into())))
        }
    }

    /// Blocks until the gate opens, then succeeds with an empty result.
    struct GatedBackend {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl QueryBackend for GatedBackend {
        async fn fetch(&self, _text: &str) -> Result<QueryResult, InsightError> {
            self.gate.notified().await;
            Ok(QueryResult {
                summary: Some("done".into()),
                ..QueryResult::default()
            })
        }
    }

    struct PendingBackend;

    #[async_trait]
    impl QueryBackend for PendingBackend {
        async fn fetch(&self, _text: &str) -> Result<QueryResult, InsightError> {
            std::future::pending().await
        }
    }

    fn summary(text: &str) -> QueryResult {
        QueryResult {
            data: None,
            summary: Some(text.into()),
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_skipped() {
        let lifecycle = QueryLifecycle::new(ScriptedBackend::new(vec![]));
        for text in ["", " ", "\n\t  "] {
            assert_eq!(lifecycle.submit(text).await, Submission::Skipped);
        }
        assert_eq!(lifecycle.state(), RequestState::Idle);
        assert_eq!(lifecycle.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_replaces_state() {
        let lifecycle = QueryLifecycle::new(ScriptedBackend::new(vec![Ok(summary("ok"))]));
        assert_eq!(lifecycle.submit("bikes").await, Submission::Completed);
        assert_eq!(lifecycle.state(), RequestState::Success(summary("ok")));
    }

    #[tokio::test]
    async fn test_raw_text_is_forwarded() {
        let lifecycle = QueryLifecycle::new(ScriptedBackend::new(vec![Ok(summary("ok"))]));
        lifecycle.submit("  bikes in Goa ").await;
        assert_eq!(*lifecycle.backend.received.lock().unwrap(), ["  bikes in Goa "]);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let lifecycle = QueryLifecycle::new(ScriptedBackend::new(vec![
            Err(InsightError::HttpStatusError(500)),
            Ok(summary("second time lucky")),
        ]));

        lifecycle.submit("bikes").await;
        let state = lifecycle.state();
        assert!(state.error().unwrap().contains("500"));

        assert_eq!(lifecycle.submit("bikes").await, Submission::Completed);
        assert_eq!(lifecycle.state(), RequestState::Success(summary("second time lucky")));
    }

    #[tokio::test]
    async fn test_loading_published_before_response() {
        let gate = Arc::new(Notify::new());
        let lifecycle = QueryLifecycle::new(GatedBackend { gate: gate.clone() });
        let mut rx = lifecycle.subscribe();

        let observer = async {
            rx.changed().await.unwrap();
            let seen = rx.borrow_and_update().clone();
            gate.notify_one();
            seen
        };
        let (outcome, seen) = tokio::join!(lifecycle.submit("bikes"), observer);

        assert_eq!(seen, RequestState::Loading);
        assert_eq!(outcome, Submission::Completed);
        assert_eq!(lifecycle.state(), RequestState::Success(summary("done")));
    }

    #[tokio::test]
    async fn test_second_submit_while_loading_is_busy() {
        let gate = Arc::new(Notify::new());
        let lifecycle = QueryLifecycle::new(GatedBackend { gate: gate.clone() });

        let second = async {
            tokio::task::yield_now().await;
            assert!(lifecycle.is_loading());
            let outcome = lifecycle.submit("cars").await;
            gate.notify_one();
            outcome
        };
        let (first, second) = tokio::join!(lifecycle.submit("bikes"), second);

        assert_eq!(first, Submission::Completed);
        assert_eq!(second, Submission::Busy);
    }

    #[tokio::test]
    async fn test_response_after_unmount_is_discarded() {
        let gate = Arc::new(Notify::new());
        let lifecycle = QueryLifecycle::new(GatedBackend { gate: gate.clone() });
        let liveness = lifecycle.liveness();

        let teardown = async {
            tokio::task::yield_now().await;
            liveness.unmount();
            gate.notify_one();
        };
        let (outcome, ()) = tokio::join!(lifecycle.submit("bikes"), teardown);

        assert_eq!(outcome, Submission::Discarded);
        assert_eq!(lifecycle.state(), RequestState::Loading);
    }

    #[tokio::test]
    async fn test_dropped_submit_leaves_loading() {
        let lifecycle = QueryLifecycle::new(PendingBackend);
        let timed_out = tokio::time::timeout(Duration::from_millis(20), lifecycle.submit("bikes")).await;
        assert!(timed_out.is_err());
        assert_eq!(lifecycle.state(), RequestState::Failure(INTERRUPTED.to_string()));
    }

    #[tokio::test]
    async fn test_reset_clears_result() {
        let lifecycle = QueryLifecycle::new(ScriptedBackend::new(vec![Ok(summary("ok"))]));
        lifecycle.submit("bikes").await;
        lifecycle.reset();
        assert_eq!(lifecycle.state(), RequestState::Idle);
    }
}
