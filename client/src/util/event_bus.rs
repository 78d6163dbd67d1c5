//! Typed application event bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets a navigation action signal a feature it holds no reference to (the
//! Spin & Win promotion). Publishers and observers share only the `EventBus`
//! handle carried in the provider bundle and the `AppEvent` vocabulary.
//!
//! DESIGN
//! ======
//! Handlers are snapshotted before delivery so a handler may subscribe or
//! unsubscribe without deadlocking the bus.

#[cfg(test)]
#[path = "event_bus_test.rs"]
mod event_bus_test;

use std::sync::{Arc, Mutex, MutexGuard};

/// Events broadcast between loosely coupled features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppEvent {
    /// Ask the promotion feature to show its spin-the-wheel dialog.
    OpenSpinPromo,
}

impl AppEvent {
    /// Stable wire name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::OpenSpinPromo => "open-spin-promo",
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(AppEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

/// Cloneable publish/subscribe channel; clones share one registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // A panicking handler never runs under the lock, so the data is intact.
        match self.registry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let mut registry = self.registry();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry();
        let before = registry.handlers.len();
        registry.handlers.retain(|(existing, _)| *existing != id);
        registry.handlers.len() != before
    }

    /// Deliver `event` to every current subscriber; returns how many ran.
    pub fn publish(&self, event: AppEvent) -> usize {
        let handlers: Vec<Handler> = self
            .registry()
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        if handlers.is_empty() {
            leptos::logging::log!("event {} published with no subscribers", event.name());
        }
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry().handlers.len()
    }
}

/// Subscribe for the lifetime of the current reactive owner.
pub fn use_app_event<F>(bus: &EventBus, handler: F)
where
    F: Fn(AppEvent) + Send + Sync + 'static,
{
    let id = bus.subscribe(handler);
    let bus = bus.clone();
    leptos::prelude::on_cleanup(move || {
        bus.unsubscribe(id);
    });
}
