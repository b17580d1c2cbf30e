//! Module: notify
//! Responsibility: push-model change notification. Mutations publish events
//! through the namespace hub so every observer of a `(tag, name)` key sees
//! updated state without polling.
//!
//! Observers are invoked after the mutation has committed and after all
//! internal locks are released; they may call back into the namespace.

use crate::{name::Name, object::Ident};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::{Arc, Weak};
use tracing::trace;

///
/// ObjectEvent
///
/// Wire-facing notification record handed to observers (and, through the
/// transport collaborator, to remote clients).
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ObjectEvent {
    Added {
        tag: &'static str,
        name: Name,
    },
    Removed {
        tag: &'static str,
        name: Name,
    },
    Changed {
        tag: &'static str,
        name: Name,
        attribute: &'static str,
    },
}

///
/// EventObserver
///

pub trait EventObserver: Send + Sync {
    fn object_event(&self, event: &ObjectEvent);
}

///
/// EventHub
///
/// Observer registry owned by the namespace. Publication snapshots the
/// observer list so subscriptions during fan-out cannot deadlock.
///

#[derive(Default)]
pub(crate) struct EventHub {
    observers: RwLock<Vec<Arc<dyn EventObserver>>>,
}

impl EventHub {
    pub(crate) fn subscribe(&self, observer: Arc<dyn EventObserver>) {
        self.observers.write().push(observer);
    }

    pub(crate) fn publish(&self, event: &ObjectEvent) {
        let observers = self.observers.read().clone();

        trace!(?event, observers = observers.len(), "publish");
        for observer in observers {
            observer.object_event(event);
        }
    }
}

///
/// Notify
///
/// Cloneable handle entities hold to push attribute changes back to the
/// hub. Downgraded so an entity outliving its namespace degrades to a
/// no-op rather than keeping the hub alive.
///

#[derive(Clone, Debug)]
pub struct Notify(Weak<EventHub>);

impl Notify {
    /// Handle with no hub; mutations commit silently. Test fixtures and
    /// detached construction only.
    #[must_use]
    pub const fn detached() -> Self {
        Self(Weak::new())
    }

    pub(crate) fn new(hub: &Arc<EventHub>) -> Self {
        Self(Arc::downgrade(hub))
    }

    /// Publish an attribute change for the owning object. Silently a no-op
    /// once the object is detached or the namespace is gone.
    pub fn attribute(&self, ident: &Ident, attribute: &'static str) {
        if ident.is_detached() {
            return;
        }
        if let Some(hub) = self.0.upgrade() {
            hub.publish(&ObjectEvent::Changed {
                tag: ident.tag(),
                name: ident.key().clone(),
                attribute,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;
    use parking_lot::Mutex;

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub events: Mutex<Vec<ObjectEvent>>,
    }

    impl EventObserver for Recorder {
        fn object_event(&self, event: &ObjectEvent) {
            self.events.lock().push(event.clone());
        }
    }

    #[test]
    fn attribute_publishes_changed_event() {
        let hub = Arc::new(EventHub::default());
        let recorder = Arc::new(Recorder::default());
        hub.subscribe(recorder.clone());

        let ident = Ident::new("alarm", Name::try_from_str("A3").unwrap());
        Notify::new(&hub).attribute(&ident, "state");

        let events = recorder.events.lock();
        assert_eq!(
            *events,
            vec![ObjectEvent::Changed {
                tag: "alarm",
                name: Name::try_from_str("A3").unwrap(),
                attribute: "state",
            }]
        );
    }

    #[test]
    fn detached_ident_is_silent() {
        let hub = Arc::new(EventHub::default());
        let recorder = Arc::new(Recorder::default());
        hub.subscribe(recorder.clone());

        let ident = Ident::new("alarm", Name::try_from_str("A3").unwrap());
        ident.detach();
        Notify::new(&hub).attribute(&ident, "state");

        assert!(recorder.events.lock().is_empty());
    }

    #[test]
    fn dropped_hub_is_silent() {
        let notify = {
            let hub = Arc::new(EventHub::default());
            Notify::new(&hub)
        };
        let ident = Ident::new("alarm", Name::try_from_str("A3").unwrap());
        notify.attribute(&ident, "state");
    }
}
