//! Pub/sub delivery for one event category.

use std::sync::Arc;

use parking_lot::Mutex;

/// Error produced by a subscriber's handler.
pub type DeliveryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Receives events of category `E`.
///
/// Handlers take `&self`: a subscriber is shared between the channel and
/// its owning UI instance, so any mutation happens behind the subscriber's
/// own interior mutability.
pub trait Subscriber<E>: Send + Sync {
    /// Handle one event.
    ///
    /// Errors are isolated per subscriber and reported to the publisher
    /// after the delivery pass completes; they never stop delivery to the
    /// remaining subscribers.
    fn on_event(&self, event: &E) -> Result<(), DeliveryError>;
}

/// One delivery failure from a publish pass.
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Position of the failing subscriber in registration order.
    pub index: usize,
    /// The error its handler returned.
    pub error: DeliveryError,
}

/// Result of a publish pass.
#[derive(Debug)]
pub struct PublishOutcome {
    /// Subscribers that handled the event successfully.
    pub delivered: usize,
    /// Per-subscriber failures, in delivery order.
    pub failures: Vec<DeliveryFailure>,
}

impl PublishOutcome {
    /// True when every subscriber handled the event.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A shared pub/sub bus delivering events of one category to all currently
/// registered subscribers, in registration order.
///
/// Cloning the channel clones a handle to the same subscriber list. The
/// composition root creates one channel per category for the lifetime of
/// the process and hands clones to registrars and publishers; registration
/// and publishing are safe under concurrent invocation from UI instances
/// starting up and tearing down in parallel.
pub struct EventChannel<E: 'static> {
    subscribers: Arc<Mutex<Vec<Arc<dyn Subscriber<E>>>>>,
}

impl<E: 'static> Clone for EventChannel<E> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<E: 'static> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventChannel<E> {
    /// Creates an empty channel.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a subscriber at the end of the delivery order.
    ///
    /// Registering an already-registered subscriber is a logged no-op;
    /// delivery stays exactly-once per subscriber. Returns whether the
    /// subscriber was newly added.
    pub fn register(&self, subscriber: &Arc<dyn Subscriber<E>>) -> bool {
        let mut subscribers = self.subscribers.lock();
        if subscribers.iter().any(|s| same_subscriber(s, subscriber)) {
            tracing::trace!("subscriber already registered, ignoring");
            return false;
        }
        subscribers.push(Arc::clone(subscriber));
        tracing::trace!(count = subscribers.len(), "subscriber registered");
        true
    }

    /// Unregisters a subscriber.
    ///
    /// Unregistering a subscriber that is not a member is a logged no-op.
    /// Returns whether the subscriber was present.
    pub fn unregister(&self, subscriber: &Arc<dyn Subscriber<E>>) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| !same_subscriber(s, subscriber));
        if subscribers.len() == before {
            tracing::trace!("subscriber was not registered, ignoring");
            return false;
        }
        tracing::trace!(count = subscribers.len(), "subscriber unregistered");
        true
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Delivers `event` synchronously to every subscriber registered at the
    /// time of the call, in registration order, without waiting for any
    /// response.
    ///
    /// The subscriber list is snapshotted before delivery and the lock is
    /// not held while handlers run, so a handler may register, unregister,
    /// or publish without deadlocking; membership changes take effect from
    /// the next publish.
    pub fn publish(&self, event: &E) -> PublishOutcome {
        let snapshot: Vec<Arc<dyn Subscriber<E>>> = self.subscribers.lock().clone();
        let mut delivered = 0;
        let mut failures = Vec::new();
        for (index, subscriber) in snapshot.iter().enumerate() {
            match subscriber.on_event(event) {
                Ok(()) => delivered += 1,
                Err(error) => {
                    tracing::debug!(index, %error, "subscriber failed to handle event");
                    failures.push(DeliveryFailure { index, error });
                }
            }
        }
        PublishOutcome {
            delivered,
            failures,
        }
    }
}

/// Identity compare on the subscriber allocation. Compares data pointers
/// only: vtable pointers can differ for the same object across codegen
/// units, so `Arc::ptr_eq` is not a reliable identity for `dyn` references.
fn same_subscriber<E: 'static>(a: &Arc<dyn Subscriber<E>>, b: &Arc<dyn Subscriber<E>>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
