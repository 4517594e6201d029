//! # Notification Channel
//!
//! [`EventEmitter`] is a small, typed publish/subscribe primitive. Every component
//! that changes state owns its emitters as plain fields; there is no process-wide
//! registry.
//!
//! ## Semantics
//!
//! - **Multiplicity**: the same listener may be registered several times and is
//!   then invoked once per registration.
//! - **Removal**: removing a listener drops its *earliest* still-registered
//!   occurrence only. Identity is the `Arc` allocation, so keep the
//!   [`Listener`] you registered if you want to remove it later.
//! - **Dispatch**: [`EventEmitter::emit`] is synchronous and runs listeners in
//!   registration order. A panicking listener unwinds into the caller of `emit`.
//!
//! Dispatch iterates over a snapshot of the registry, so a listener may add or
//! remove listeners without deadlocking; the change applies from the next emit.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

type Registry<E> = Arc<Mutex<Vec<Listener<E>>>>;

pub struct EventEmitter<E> {
    listeners: Registry<E>,
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The returned handle removes this registration.
    pub fn add_listener(&self, listener: Listener<E>) -> Unsubscribe<E> {
        self.listeners.lock().push(Arc::clone(&listener));
        Unsubscribe {
            registry: Arc::downgrade(&self.listeners),
            listener,
        }
    }

    /// Remove the earliest registration of `listener`, if any.
    pub fn remove_listener(&self, listener: &Listener<E>) {
        remove_first(&self.listeners, listener);
    }

    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self.listeners.lock().clone();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

fn remove_first<E>(registry: &Mutex<Vec<Listener<E>>>, listener: &Listener<E>) {
    let mut listeners = registry.lock();
    if let Some(pos) = listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
        listeners.remove(pos);
    }
}

/// Removal capability returned by [`EventEmitter::add_listener`].
///
/// Holds the emitter weakly: unsubscribing after the emitter is gone is a no-op.
/// Dropping the handle does *not* unsubscribe.
pub struct Unsubscribe<E> {
    registry: Weak<Mutex<Vec<Listener<E>>>>,
    listener: Listener<E>,
}

impl<E> Unsubscribe<E> {
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            remove_first(&registry, &self.listener);
        }
    }
}

/// Captures every event emitted on an [`EventEmitter`] until dropped.
///
/// Mostly useful in tests:
///
/// ```
/// use jokeapp::events::{EventEmitter, EventRecorder};
///
/// let emitter = EventEmitter::<u32>::new();
/// let recorder = EventRecorder::new(&emitter);
/// emitter.emit(&7);
/// assert_eq!(recorder.data(), vec![7]);
/// ```
pub struct EventRecorder<E: Clone + Send + 'static> {
    events: Arc<Mutex<Vec<E>>>,
    subscription: Option<Unsubscribe<E>>,
}

impl<E: Clone + Send + 'static> EventRecorder<E> {
    pub fn new(emitter: &EventEmitter<E>) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let subscription = emitter.add_listener(Arc::new(move |event: &E| {
            sink.lock().push(event.clone());
        }));
        Self {
            events,
            subscription: Some(subscription),
        }
    }

    /// Events recorded so far.
    pub fn data(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Events recorded so far; clears the buffer.
    pub fn consume(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Stop recording and drop everything captured.
    pub fn discard(mut self) {
        self.stop();
        self.events.lock().clear();
    }

    fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<E: Clone + Send + 'static> Drop for EventRecorder<E> {
    fn drop(&mut self) {
        self.stop();
    }
}
