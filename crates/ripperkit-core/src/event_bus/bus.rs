//! Event Bus implementation.
//!
//! Provides the synchronous, single-threaded EventBus owned by each
//! crosshair controller.

use uuid::Uuid;

use super::events::{CrosshairEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Filter that only passes committed changes
    pub fn changes() -> Self {
        EventFilter::Categories(vec![EventCategory::Change])
    }

    /// Check if an event matches this filter
    pub fn matches(&self, event: &CrosshairEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions.
///
/// Handlers get a borrowed snapshot of the event and must not call back into
/// the publisher.
pub type EventHandler = Box<dyn Fn(&CrosshairEvent)>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: EventHandler,
}

/// Ordered list of synchronous event handlers
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    /// Create an empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event to every matching handler, in registration order.
    ///
    /// Returns the number of handlers that were invoked.
    pub fn publish(&self, event: &CrosshairEvent) -> usize {
        let mut delivered = 0;
        for subscription in &self.subscriptions {
            if subscription.filter.matches(event) {
                (subscription.handler)(event);
                delivered += 1;
            }
        }
        tracing::trace!("{} delivered to {} handler(s)", event.description(), delivered);
        delivered
    }

    /// Subscribe to events with a synchronous handler
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&CrosshairEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.push(Subscription {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        let removed = self.subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
