// events/bus/event_bus.rs
//
// In-process event bus. Services publish what happened; the activity
// handler and tests listen.
//
// RULES:
// - Delivery is synchronous, in subscription order
// - A panicking subscriber is logged and skipped
// - Subscribers must not subscribe from inside a delivery

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::events::types::DomainEvent;

type Subscriber = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Cloning yields a handle onto the same subscribers and log.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<RwLock<HashMap<TypeId, Vec<Subscriber>>>>,
    history: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// One emitted event as seen by the bus
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: DateTime<Utc>,
    pub delivered_to: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let subscriber: Subscriber = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });

        write(&self.subscribers)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(subscriber);
    }

    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let subscribers = read(&self.subscribers);
        let listeners = subscribers
            .get(&TypeId::of::<E>())
            .map(Vec::as_slice)
            .unwrap_or_default();

        log::debug!(
            "[EVENT] {} {} -> {} subscriber(s)",
            event.event_type(),
            event.event_id(),
            listeners.len()
        );
        write(&self.history).push(EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at(),
            delivered_to: listeners.len(),
        });

        for listener in listeners {
            let delivered = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                listener(&event as &dyn Any)
            }));
            if delivered.is_err() {
                log::error!("A subscriber to {} panicked", event.event_type());
            }
        }
    }

    /// Everything emitted so far, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        read(&self.history).clone()
    }
}

// Subscriber panics are caught, so a poisoned lock still guards sound data
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
