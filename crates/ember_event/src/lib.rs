//! # ember_event - Typed Event Plumbing
//!
//! Observer and channel primitives consumed by the gameplay model crates:
//! - Subscription with explicit tokens (subscribe/unsubscribe)
//! - In-order synchronous delivery
//! - Drainable channels for presenters that poll instead of observing
//!
//! Delivery is cooperative and single-threaded: whoever owns the bus
//! decides when `emit` runs. Handlers carry `Send + Sync` bounds so an
//! owning system can still be moved across threads behind its own lock.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Token identifying one subscription on an [`EventBus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Boxed event handler function type
pub type EventHandler<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Observer registry for a single event type.
///
/// Handlers are invoked in subscription order. Unsubscribing requires the
/// token returned by [`EventBus::subscribe`], which makes the
/// subscribe-on-enable / unsubscribe-on-disable lifecycle of a presenter
/// an explicit, testable contract.
pub struct EventBus<E> {
    handlers: Vec<(SubscriberId, EventHandler<E>)>,
    next_subscriber_id: u64,
}

impl<E> EventBus<E> {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Subscribe a handler, returning its token
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns false if the token is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub_id, _)| *sub_id != id);
        self.handlers.len() != before
    }

    /// Deliver one event to every handler, in subscription order
    pub fn emit(&self, event: &E) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    /// Number of live subscriptions
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Drop all subscriptions
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue for single-type events, drained by the consumer.
///
/// Backed by an unbounded crossbeam channel; `send` never blocks. A
/// presenter typically forwards bus events into a channel via a cloned
/// [`EventChannel::sender`] and drains once per frame.
pub struct EventChannel<E> {
    sender: Sender<E>,
    receiver: Receiver<E>,
}

impl<E> EventChannel<E> {
    /// Create a new channel
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Send an event
    pub fn send(&self, event: E) {
        // The receiver lives in self, so the channel cannot be disconnected.
        let _ = self.sender.send(event);
    }

    /// Clone the sending half, for wiring into a bus subscription
    pub fn sender(&self) -> Sender<E> {
        self.sender.clone()
    }

    /// Receive one event, if any is pending
    pub fn receive(&self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending events
    pub fn drain(&self) -> Vec<E> {
        self.receiver.try_iter().collect()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Get pending count
    pub fn len(&self) -> usize {
        self.receiver.len()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{EventBus, EventChannel, EventHandler, SubscriberId};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct TestEvent(i32);

    #[test]
    fn test_subscribe_and_emit() {
        let mut bus = EventBus::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        bus.subscribe(move |e: &TestEvent| {
            counter_clone.fetch_add(e.0 as u32, Ordering::SeqCst);
        });

        bus.emit(&TestEvent(2));
        bus.emit(&TestEvent(3));

        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = bus.subscribe(move |_: &TestEvent| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(&TestEvent(0));
        assert!(bus.unsubscribe(id));
        bus.emit(&TestEvent(0));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.handler_count(), 0);
        // Unknown token is rejected
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_clear_drops_all_subscriptions() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        bus.subscribe(|_| {});
        bus.subscribe(|_| {});
        assert_eq!(bus.handler_count(), 2);

        bus.clear();
        assert_eq!(bus.handler_count(), 0);
    }

    #[test]
    fn test_emit_order() {
        let mut bus = EventBus::new();
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let order1 = order.clone();
        let order2 = order.clone();

        bus.subscribe(move |e: &TestEvent| {
            order1.lock().push(("first", e.0));
        });
        bus.subscribe(move |e: &TestEvent| {
            order2.lock().push(("second", e.0));
        });

        bus.emit(&TestEvent(42));

        let received = order.lock();
        assert_eq!(received[0], ("first", 42));
        assert_eq!(received[1], ("second", 42));
    }

    #[test]
    fn test_event_channel() {
        let channel: EventChannel<TestEvent> = EventChannel::new();

        channel.send(TestEvent(1));
        channel.send(TestEvent(2));
        channel.send(TestEvent(3));

        assert_eq!(channel.len(), 3);
        assert_eq!(channel.receive().map(|e| e.0), Some(1));
        let events = channel.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, 2);
        assert_eq!(events[1].0, 3);
        assert!(channel.is_empty());
        assert!(channel.receive().is_none());
    }

    #[test]
    fn test_bus_forwarding_into_channel() {
        let mut bus = EventBus::new();
        let channel: EventChannel<i32> = EventChannel::new();
        let sender = channel.sender();

        bus.subscribe(move |e: &TestEvent| {
            let _ = sender.send(e.0);
        });

        bus.emit(&TestEvent(7));
        bus.emit(&TestEvent(9));

        assert_eq!(channel.drain(), vec![7, 9]);
    }
}
