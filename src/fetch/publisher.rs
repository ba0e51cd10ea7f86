//! Contains `ForecastPublisher`, which performs one forecast fetch on demand and
//! pushes its single outcome to every attached subscriber.
//!
//! The fetch starts with the first subscription, never at construction, and is
//! never repeated. Subscribers attached while it is in flight receive the outcome
//! when it lands; subscribers attached afterwards receive it straight away. Each
//! subscriber sees either one document followed by [`Completion::Finished`], or a
//! single [`Completion::Failure`].
//!
//! Cancelling a [`Subscription`] unregisters its subscriber, which then receives
//! nothing further. When the last subscriber leaves while the request is still in
//! flight, the request is aborted and the publisher ends up
//! [`FetchState::Cancelled`].

use crate::config::StatusPolicy;
use crate::error::ForecastError;
use crate::fetch::endpoint::build_url;
use crate::fetch::pipeline::fetch_document;
use crate::fetch::transport::Transport;
use crate::types::coordinate::Coordinate;
use crate::types::forecast::ForecastDocument;
use log::{debug, info, warn};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// The outcome of a fetch as seen by a single-shot consumer.
pub type FetchResult = Result<Arc<ForecastDocument>, Arc<ForecastError>>;

/// How a subscription ended.
#[derive(Debug, Clone)]
pub enum Completion {
    /// The document was delivered.
    Finished,
    /// The fetch failed. The same error is shared by every subscriber.
    Failure(Arc<ForecastError>),
}

/// Receives the events of a [`ForecastPublisher`].
///
/// A subscriber is called at most twice: [`ForecastSubscriber::receive`] then
/// [`ForecastSubscriber::receive_completion`] with `Finished`, or only
/// `receive_completion` with `Failure`. Calls happen on whichever thread
/// resolves the fetch, or inside `subscribe` when the outcome is already known.
///
/// A subscriber that panics during a broadcast is dropped and the panic is
/// logged; the remaining subscribers still receive the outcome. A panic while
/// replaying a stored outcome inside `subscribe` propagates to the caller.
pub trait ForecastSubscriber: Send + 'static {
    fn receive(&mut self, document: Arc<ForecastDocument>);

    fn receive_completion(&mut self, completion: Completion);
}

/// A [`ForecastSubscriber`] made of two closures.
pub struct Sink<V, C> {
    on_value: V,
    on_completion: C,
}

impl<V, C> Sink<V, C>
where
    V: FnMut(Arc<ForecastDocument>) + Send + 'static,
    C: FnMut(Completion) + Send + 'static,
{
    pub fn new(on_value: V, on_completion: C) -> Self {
        Self {
            on_value,
            on_completion,
        }
    }
}

impl<V, C> ForecastSubscriber for Sink<V, C>
where
    V: FnMut(Arc<ForecastDocument>) + Send + 'static,
    C: FnMut(Completion) + Send + 'static,
{
    fn receive(&mut self, document: Arc<ForecastDocument>) {
        (self.on_value)(document)
    }

    fn receive_completion(&mut self, completion: Completion) {
        (self.on_completion)(completion)
    }
}

// Folds value + completion into a single callback invocation.
struct ResultCallback<F> {
    document: Option<Arc<ForecastDocument>>,
    callback: Option<F>,
}

impl<F> ForecastSubscriber for ResultCallback<F>
where
    F: FnOnce(FetchResult) + Send + 'static,
{
    fn receive(&mut self, document: Arc<ForecastDocument>) {
        self.document = Some(document);
    }

    fn receive_completion(&mut self, completion: Completion) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        let result = match (completion, self.document.take()) {
            (Completion::Finished, Some(document)) => Ok(document),
            (Completion::Finished, None) => Err(Arc::new(ForecastError::Cancelled)),
            (Completion::Failure(error), _) => Err(error),
        };
        callback(result);
    }
}

/// Where the single fetch of a publisher stands.
#[derive(Debug, Clone)]
pub enum FetchState {
    /// Nobody has subscribed yet.
    Idle,
    /// The request is in flight.
    RequestSent,
    /// The document was decoded and delivered.
    Completed(Arc<ForecastDocument>),
    /// The fetch failed.
    Failed(Arc<ForecastError>),
    /// The fetch was abandoned before it finished.
    Cancelled,
}

impl FetchState {
    /// Whether the fetch has reached its final state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FetchState::Completed(_) | FetchState::Failed(_) | FetchState::Cancelled
        )
    }
}

struct Registry {
    state: FetchState,
    subscribers: Vec<(u64, Box<dyn ForecastSubscriber>)>,
    next_id: u64,
}

struct Shared {
    coordinate: Coordinate,
    endpoint: String,
    status_policy: StatusPolicy,
    transport: Arc<dyn Transport>,
    cancel_token: CancellationToken,
    registry: Mutex<Registry>,
}

impl Shared {
    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Subscriber callbacks never run under the lock, so a poisoned lock
        // still holds a consistent registry.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enters a terminal state and hands it to every registered subscriber.
    fn settle(&self, mut registry: MutexGuard<'_, Registry>, outcome: FetchState) {
        if registry.state.is_terminal() {
            return;
        }
        registry.state = outcome.clone();
        let subscribers = std::mem::take(&mut registry.subscribers);
        drop(registry);

        debug!(
            "Delivering forecast outcome for {} to {} subscriber(s)",
            self.coordinate,
            subscribers.len()
        );
        for (id, subscriber) in subscribers {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| deliver(subscriber, &outcome)));
            if delivered.is_err() {
                warn!(
                    "Subscriber {} to forecast for {} panicked while receiving the outcome",
                    id, self.coordinate
                );
            }
        }
    }

    fn unsubscribe(&self, id: u64) {
        let mut registry = self.registry();
        let removed = registry
            .subscribers
            .iter()
            .position(|(subscriber_id, _)| *subscriber_id == id)
            .map(|index| registry.subscribers.remove(index));

        let abort = removed.is_some()
            && registry.subscribers.is_empty()
            && matches!(registry.state, FetchState::RequestSent);
        if abort {
            registry.state = FetchState::Cancelled;
            self.cancel_token.cancel();
        }
        drop(registry);
        drop(removed);

        if abort {
            info!(
                "Last subscriber left, cancelled forecast request for {}",
                self.coordinate
            );
        }
    }
}

// Settles the publisher as cancelled if the fetch task is dropped without
// reaching an outcome, e.g. when its runtime shuts down.
struct SettleOnDrop(Arc<Shared>);

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        let registry = self.0.registry();
        if !registry.state.is_terminal() {
            warn!("Forecast task for {} ended without an outcome", self.0.coordinate);
        }
        self.0.settle(registry, FetchState::Cancelled);
    }
}

fn deliver(mut subscriber: Box<dyn ForecastSubscriber>, state: &FetchState) {
    match state {
        FetchState::Completed(document) => {
            subscriber.receive(Arc::clone(document));
            subscriber.receive_completion(Completion::Finished);
        }
        FetchState::Failed(error) => {
            subscriber.receive_completion(Completion::Failure(Arc::clone(error)));
        }
        FetchState::Cancelled => {
            subscriber.receive_completion(Completion::Failure(Arc::new(ForecastError::Cancelled)));
        }
        FetchState::Idle | FetchState::RequestSent => {}
    }
}

/// A lazily started, shared forecast fetch for one coordinate.
///
/// Cloning a publisher yields another handle to the same fetch. Obtain one from
/// [`crate::ForecastClient::publisher`].
///
/// Subscribing requires a Tokio runtime, on which the fetch is spawned.
///
/// # Examples
///
/// ```no_run
/// use smhi_forecast::{Completion, ForecastClient, ForecastError, ParameterName, Sink};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let client = ForecastClient::builder().build()?;
/// let publisher = client.publisher(59.3258414, 17.7018733);
///
/// let subscription = publisher.subscribe(Sink::new(
///     |document| {
///         let temperature = document.view().get(ParameterName::AirTemperature).value();
///         println!("It is {temperature} °C");
///     },
///     |completion| {
///         if let Completion::Failure(error) = completion {
///             eprintln!("Forecast failed: {error}");
///         }
///     },
/// ));
///
/// // Any number of observers share the same request.
/// let document = publisher.result().await.map_err(|_| ForecastError::Cancelled)?;
/// println!("{} entries", document.time_series.len());
/// drop(subscription);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ForecastPublisher {
    shared: Arc<Shared>,
}

impl ForecastPublisher {
    pub(crate) fn new(
        coordinate: Coordinate,
        endpoint: String,
        status_policy: StatusPolicy,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                coordinate,
                endpoint,
                status_policy,
                transport,
                cancel_token: CancellationToken::new(),
                registry: Mutex::new(Registry {
                    state: FetchState::Idle,
                    subscribers: Vec::new(),
                    next_id: 0,
                }),
            }),
        }
    }

    /// The normalised coordinate this publisher fetches.
    pub fn coordinate(&self) -> Coordinate {
        self.shared.coordinate
    }

    /// A snapshot of the fetch state.
    pub fn state(&self) -> FetchState {
        self.shared.registry().state.clone()
    }

    /// Attaches a subscriber, starting the fetch if this is the first one.
    ///
    /// If the outcome is already known the subscriber is called before this
    /// method returns, and the returned handle is inert.
    pub fn subscribe<S: ForecastSubscriber>(&self, subscriber: S) -> Subscription {
        let subscriber: Box<dyn ForecastSubscriber> = Box::new(subscriber);
        let mut registry = self.shared.registry();

        if registry.state.is_terminal() {
            let outcome = registry.state.clone();
            drop(registry);
            deliver(subscriber, &outcome);
            return Subscription::inert();
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, subscriber));
        debug!("Subscriber {} attached to forecast for {}", id, self.shared.coordinate);

        if matches!(registry.state, FetchState::Idle) {
            if let Err(error) = self.start(&mut registry) {
                self.shared
                    .settle(registry, FetchState::Failed(Arc::new(error)));
                return Subscription::inert();
            }
        }

        Subscription {
            shared: Some(Arc::clone(&self.shared)),
            id,
        }
    }

    /// Attaches a pair of closures, see [`Sink`].
    pub fn sink<V, C>(&self, on_value: V, on_completion: C) -> Subscription
    where
        V: FnMut(Arc<ForecastDocument>) + Send + 'static,
        C: FnMut(Completion) + Send + 'static,
    {
        self.subscribe(Sink::new(on_value, on_completion))
    }

    /// Attaches a callback that is invoked exactly once with the outcome.
    pub fn on_result<F>(&self, callback: F) -> Subscription
    where
        F: FnOnce(FetchResult) + Send + 'static,
    {
        self.subscribe(ResultCallback {
            document: None,
            callback: Some(callback),
        })
    }

    /// Subscribes and waits for the outcome.
    ///
    /// Dropping the returned future before it resolves cancels its subscription.
    pub async fn result(&self) -> FetchResult {
        let (sender, receiver) = oneshot::channel();
        let _subscription = self.on_result(move |result| {
            let _ = sender.send(result);
        });
        receiver
            .await
            .unwrap_or_else(|_| Err(Arc::new(ForecastError::Cancelled)))
    }

    /// Cancels the fetch for every subscriber. None of them receives further
    /// events; later subscribers receive [`ForecastError::Cancelled`].
    /// Does nothing once the fetch has finished.
    pub fn cancel(&self) {
        let mut registry = self.shared.registry();
        if registry.state.is_terminal() {
            return;
        }
        registry.state = FetchState::Cancelled;
        let dropped = std::mem::take(&mut registry.subscribers);
        drop(registry);

        self.shared.cancel_token.cancel();
        info!("Cancelled forecast request for {}", self.shared.coordinate);
        drop(dropped);
    }

    fn start(&self, registry: &mut Registry) -> Result<(), ForecastError> {
        let runtime = Handle::try_current().map_err(ForecastError::MissingRuntime)?;
        let url = build_url(&self.shared.endpoint, &self.shared.coordinate)?;
        registry.state = FetchState::RequestSent;

        let guard = SettleOnDrop(Arc::clone(&self.shared));
        let cancelled = self.shared.cancel_token.clone();
        runtime.spawn(async move {
            let shared = &guard.0;
            let request = fetch_document(shared.transport.as_ref(), &url, shared.status_policy);
            let outcome = tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!("Aborted in-flight forecast request to {}", url);
                    return;
                }
                outcome = request => outcome,
            };
            let state = match outcome {
                Ok(document) => FetchState::Completed(Arc::new(document)),
                Err(error) => FetchState::Failed(Arc::new(error)),
            };
            shared.settle(shared.registry(), state);
        });
        Ok(())
    }
}

impl fmt::Debug for ForecastPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastPublisher")
            .field("coordinate", &self.shared.coordinate)
            .field("state", &self.state())
            .finish()
    }
}

/// Handle to one subscriber of a [`ForecastPublisher`].
///
/// Dropping the handle cancels the subscription; use [`Subscription::detach`]
/// to keep the subscriber attached without holding on to the handle.
#[must_use = "dropping a Subscription cancels it"]
pub struct Subscription {
    shared: Option<Arc<Shared>>,
    id: u64,
}

impl Subscription {
    fn inert() -> Self {
        Self { shared: None, id: 0 }
    }

    /// Unregisters the subscriber. It receives no further events.
    pub fn cancel(mut self) {
        self.release();
    }

    /// Gives up the handle while leaving the subscriber attached.
    pub fn detach(mut self) {
        self.shared = None;
    }

    fn release(&mut self) {
        if let Some(shared) = self.shared.take() {
            shared.unsubscribe(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.shared.is_some())
            .finish()
    }
}
