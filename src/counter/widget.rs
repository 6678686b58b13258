//! The visitor counter component and its mount lifecycle.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::CounterConfig;
use crate::counter::client::CountClient;
use crate::counter::display::CounterView;
use crate::counter::state::{CounterSnapshot, CounterStatus};
use crate::counter::FetchError;
use crate::lifecycle::CancelToken;
use crate::observability::metrics;
use crate::resilience::RetryPolicy;
use crate::storage::{load_cached_count, store_cached_count, LocalStore};

/// How a fetch cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A count was fetched, shown and persisted.
    Ready(u64),
    /// Every attempt failed; the previous count stays on screen.
    Failed { attempts: u32, last_error: FetchError },
    /// The mount went away first. Nothing was changed.
    Cancelled,
}

impl CycleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleOutcome::Ready(_) => "ready",
            CycleOutcome::Failed { .. } => "failed",
            CycleOutcome::Cancelled => "cancelled",
        }
    }
}

/// Self-contained counter instance.
///
/// Construction performs the synchronous startup read of the cached count.
/// [`VisitorCounter::mount`] then runs exactly one fetch cycle.
pub struct VisitorCounter {
    id: Uuid,
    client: CountClient,
    store: LocalStore,
    storage_key: String,
    policy: RetryPolicy,
    state: watch::Sender<CounterSnapshot>,
    history: Mutex<Vec<CounterStatus>>,
}

impl VisitorCounter {
    pub fn new(client: CountClient, store: LocalStore, config: &CounterConfig) -> Self {
        let storage_key = config.storage.key.clone();
        let cached = load_cached_count(&store, &storage_key);
        let (state, _) = watch::channel(CounterSnapshot::seeded(cached));
        let id = Uuid::new_v4();

        tracing::debug!(mount_id = %id, cached = ?cached, "Counter created");

        Self {
            id,
            client,
            store,
            storage_key,
            policy: RetryPolicy::from(&config.retry),
            state,
            history: Mutex::new(vec![CounterStatus::Idle]),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        *self.state.borrow()
    }

    pub fn view(&self) -> CounterView {
        CounterView::from(&self.snapshot())
    }

    /// Receiver notified on every state change.
    pub fn watch(&self) -> watch::Receiver<CounterSnapshot> {
        self.state.subscribe()
    }

    /// Statuses visited so far, starting with `Idle`.
    pub fn status_history(&self) -> Vec<CounterStatus> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Spawn the fetch cycle for this instance.
    pub fn mount(self) -> Mount {
        let counter = Arc::new(self);
        let token = CancelToken::new();
        let span = tracing::info_span!("visitor_counter", mount_id = %counter.id);

        let task = tokio::spawn({
            let counter = Arc::clone(&counter);
            let token = token.clone();
            async move { counter.fetch_cycle(&token).await }.instrument(span)
        });

        Mount {
            counter,
            token,
            task: Some(task),
        }
    }

    /// Run one fetch cycle, observing `token` at every suspension point.
    pub async fn fetch_cycle(&self, token: &CancelToken) -> CycleOutcome {
        if token.is_cancelled() {
            return self.abandon();
        }
        if self.snapshot().status != CounterStatus::Idle {
            tracing::warn!("Fetch cycle already ran for this counter");
            return CycleOutcome::Cancelled;
        }
        self.transition(CounterStatus::Loading, None);

        let mut attempt = 0;
        loop {
            attempt += 1;
            let started = Instant::now();
            let Some(result) = token.run(self.client.fetch_count()).await else {
                return self.abandon();
            };
            metrics::record_attempt(&result, started.elapsed());

            let error = match result {
                Ok(value) => return self.complete(token, value),
                Err(error) => error,
            };

            match self.policy.delay_after(attempt) {
                Some(delay) => {
                    tracing::info!(
                        attempt,
                        delay = ?delay,
                        error = %error,
                        "Count fetch failed, retrying"
                    );
                    if token.run(tokio::time::sleep(delay)).await.is_none() {
                        return self.abandon();
                    }
                }
                None => {
                    if token.is_cancelled() {
                        return self.abandon();
                    }
                    tracing::error!(attempts = attempt, error = %error, "Visitor counter error");
                    self.transition(CounterStatus::Error, None);
                    metrics::record_cycle("failed");
                    return CycleOutcome::Failed {
                        attempts: attempt,
                        last_error: error,
                    };
                }
            }
        }
    }

    fn complete(&self, token: &CancelToken, value: u64) -> CycleOutcome {
        if token.is_cancelled() {
            return self.abandon();
        }

        self.transition(CounterStatus::Ready, Some(value));
        if let Err(e) = store_cached_count(&self.store, &self.storage_key, value) {
            tracing::warn!(error = %e, "Failed to persist visitor count");
        }

        tracing::info!(count = value, "Visitor count updated");
        metrics::record_count(value);
        metrics::record_cycle("ready");
        CycleOutcome::Ready(value)
    }

    /// Unmounted: no state change, no storage write, no log event.
    fn abandon(&self) -> CycleOutcome {
        metrics::record_cycle("cancelled");
        CycleOutcome::Cancelled
    }

    fn transition(&self, next: CounterStatus, count: Option<u64>) {
        let current = self.snapshot().status;
        if !current.can_transition_to(next) {
            tracing::warn!(from = %current, to = %next, "Ignoring illegal counter transition");
            return;
        }

        self.state.send_modify(|snapshot| {
            snapshot.status = next;
            if count.is_some() {
                snapshot.count = count;
            }
        });
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(next);
        tracing::debug!(from = %current, to = %next, "Counter state changed");
    }
}

/// A mounted counter. Dropping or unmounting it cancels the fetch cycle.
pub struct Mount {
    counter: Arc<VisitorCounter>,
    token: CancelToken,
    task: Option<JoinHandle<CycleOutcome>>,
}

impl Mount {
    pub fn counter(&self) -> &Arc<VisitorCounter> {
        &self.counter
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_settled(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the fetch cycle to end.
    pub async fn settled(mut self) -> CycleOutcome {
        let Some(task) = self.task.take() else {
            return CycleOutcome::Cancelled;
        };
        match task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => CycleOutcome::Cancelled,
        }
    }

    /// Cancel the fetch cycle and wait for it to stop.
    pub async fn unmount(self) -> CycleOutcome {
        self.token.cancel();
        self.settled().await
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
