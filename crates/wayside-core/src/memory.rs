//! Module: memory
//! Responsibility: the in-process namespace: a concurrent,
//! type-partitioned population of live objects, plus the event hub
//! observers subscribe to.
//!
//! Invariants:
//! - An object is fully constructed before it becomes visible to lookup.
//! - `(tag, name)` is unique; a refused create leaves the incumbent
//!   untouched.
//! - Snapshots are taken under the read lock and iterated lock-free;
//!   concurrent create/destroy never corrupts an iterator.

use crate::{
    error::{ConflictError, Error, IdentityError},
    name::Name,
    namespace::{Checker, Namespace},
    notify::{EventHub, EventObserver, Notify, ObjectEvent},
    object::{Entity, EntityKind, Ident},
};
use parking_lot::RwLock;
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};
use tracing::debug;

type Population = BTreeMap<Name, Arc<dyn Entity>>;

///
/// MemoryNamespace
///
/// Shared live-object store. Created once at process start and handed to
/// helpers as an injected [`NamespaceHandle`](crate::namespace::NamespaceHandle);
/// test harnesses build their own.
///

#[derive(Default)]
pub struct MemoryNamespace {
    types: RwLock<BTreeMap<&'static str, Population>>,
    hub: Arc<EventHub>,
}

impl MemoryNamespace {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register an observer for add/remove/change events.
    pub fn subscribe(&self, observer: Arc<dyn EventObserver>) {
        self.hub.subscribe(observer);
    }

    /// Create an object under `name`. The builder receives the identity
    /// cell and notification handle; the object becomes visible to lookup
    /// only after construction completes.
    pub fn create<E, F>(&self, name: &str, build: F) -> Result<Arc<E>, Error>
    where
        E: EntityKind,
        F: FnOnce(Ident, Notify) -> E,
    {
        let name = Name::try_from_str(name)?;

        let entity = {
            let mut types = self.types.write();
            let population = types.entry(E::TAG).or_default();
            if population.contains_key(name.as_str()) {
                return Err(ConflictError::NameInUse { tag: E::TAG, name }.into());
            }

            let entity = Arc::new(build(
                Ident::new(E::TAG, name.clone()),
                Notify::new(&self.hub),
            ));
            population.insert(name.clone(), entity.clone());

            entity
        };

        debug!(tag = E::TAG, name = %name, "object created");
        self.hub.publish(&ObjectEvent::Added { tag: E::TAG, name });

        Ok(entity)
    }

    /// Destroy the object at `(tag, name)`. The entity's veto hook runs
    /// first; a veto leaves the object live. Destroying an object that is
    /// already gone is an identity fault.
    pub fn destroy(&self, tag: &str, name: &str) -> Result<(), Error> {
        let entity = self
            .lookup_object(tag, name)
            .ok_or_else(|| detached(tag, name))?;
        entity.on_destroy()?;

        let removed = {
            let mut types = self.types.write();
            types
                .get_mut(tag)
                .and_then(|population| population.remove(name))
        };
        // lost the race with a concurrent destroy
        let removed = removed.ok_or_else(|| detached(tag, name))?;

        removed.ident().detach();
        debug!(tag = removed.ident().tag(), name = %removed.ident().key(), "object destroyed");
        self.hub.publish(&ObjectEvent::Removed {
            tag: removed.ident().tag(),
            name: removed.ident().key().clone(),
        });

        Ok(())
    }

    /// Typed destroy; see [`destroy`](Self::destroy).
    pub fn destroy_typed<E: EntityKind>(&self, name: &str) -> Result<(), Error> {
        self.destroy(E::TAG, name)
    }

    /// Point-in-time population counts for observability surfaces.
    #[must_use]
    pub fn census(&self) -> Census {
        let types = self.types.read();

        Census {
            types: types
                .iter()
                .map(|(tag, population)| CensusEntry {
                    tag: (*tag).to_string(),
                    count: population.len(),
                })
                .collect(),
        }
    }
}

impl Namespace for MemoryNamespace {
    fn lookup_object(&self, tag: &str, name: &str) -> Option<Arc<dyn Entity>> {
        self.types.read().get(tag)?.get(name).cloned()
    }

    fn find_object(&self, tag: &str, checker: Checker<'_>) -> Option<Arc<dyn Entity>> {
        // checker runs outside the lock; it may panic or call back in
        self.snapshot(tag)
            .into_iter()
            .find(|entity| checker(entity.as_ref()))
    }

    fn snapshot(&self, tag: &str) -> Vec<Arc<dyn Entity>> {
        self.types
            .read()
            .get(tag)
            .map(|population| population.values().cloned().collect())
            .unwrap_or_default()
    }
}

fn detached(tag: &str, name: &str) -> Error {
    IdentityError::Detached {
        tag: tag.to_string(),
        name: name.to_string(),
    }
    .into()
}

///
/// Census
///

#[derive(Debug, Serialize)]
pub struct Census {
    pub types: Vec<CensusEntry>,
}

#[derive(Debug, Serialize)]
pub struct CensusEntry {
    pub tag: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entity_kind, error::NameError, object::Tagged};
    use parking_lot::Mutex;
    use std::thread;

    #[derive(Debug)]
    struct Widget {
        ident: Ident,
    }

    entity_kind!(Widget, "widget");

    impl Widget {
        fn new(ident: Ident, _notify: Notify) -> Self {
            Self { ident }
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<ObjectEvent>>,
    }

    impl EventObserver for Recorder {
        fn object_event(&self, event: &ObjectEvent) {
            self.events.lock().push(event.clone());
        }
    }

    #[test]
    fn create_then_lookup_matches() {
        let ns = MemoryNamespace::new();
        ns.create("W1", Widget::new).unwrap();

        let found = ns.lookup_object("widget", "W1").unwrap();
        assert_eq!(found.tag(), "widget");
        assert_eq!(found.name().unwrap().as_str(), "W1");
    }

    #[test]
    fn lookup_of_missing_name_is_none_not_error() {
        let ns = MemoryNamespace::new();
        assert!(ns.lookup_object("widget", "nonexistent").is_none());
        assert!(ns.lookup_object("no_such_type", "W1").is_none());
    }

    #[test]
    fn duplicate_create_leaves_incumbent_untouched() {
        let ns = MemoryNamespace::new();
        let first = ns.create("W1", Widget::new).unwrap();

        let err = ns.create::<Widget, _>("W1", Widget::new).unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict(ConflictError::NameInUse { tag: "widget", .. })
        ));

        let found = ns.lookup_object("widget", "W1").unwrap();
        let first: Arc<dyn Entity> = first;
        assert!(Arc::ptr_eq(&first, &found));
    }

    #[test]
    fn invalid_name_is_refused_at_create() {
        let ns = MemoryNamespace::new();
        let err = ns.create::<Widget, _>("", Widget::new).unwrap_err();
        assert!(matches!(err, Error::Name(NameError::Empty)));
    }

    #[test]
    fn destroy_detaches_and_unlinks() {
        let ns = MemoryNamespace::new();
        let w = ns.create("W1", Widget::new).unwrap();

        ns.destroy_typed::<Widget>("W1").unwrap();
        assert!(ns.lookup_object("widget", "W1").is_none());
        assert!(matches!(
            w.name(),
            Err(crate::error::IdentityError::Detached { .. })
        ));

        // a second destroy is an identity fault
        let err = ns.destroy_typed::<Widget>("W1").unwrap_err();
        assert!(matches!(err, Error::Identity(_)));
    }

    #[test]
    fn find_returns_first_match_in_name_order() {
        let ns = MemoryNamespace::new();
        for name in ["W3", "W1", "W2"] {
            ns.create(name, Widget::new).unwrap();
        }

        let found = ns
            .find_object("widget", &mut |e| e.name().is_ok_and(|n| n.as_str() > "W1"))
            .unwrap();
        assert_eq!(found.name().unwrap().as_str(), "W2");

        assert!(ns.find_object("widget", &mut |_| false).is_none());
    }

    #[test]
    fn snapshot_is_name_ordered() {
        let ns = MemoryNamespace::new();
        for name in ["B", "C", "A"] {
            ns.create(name, Widget::new).unwrap();
        }

        let names: Vec<String> = ns
            .snapshot("widget")
            .iter()
            .map(|e| e.name().unwrap().to_string())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn events_are_published_for_lifecycle() {
        let ns = MemoryNamespace::new();
        let recorder = Arc::new(Recorder::default());
        ns.subscribe(recorder.clone());

        ns.create("W1", Widget::new).unwrap();
        ns.destroy_typed::<Widget>("W1").unwrap();

        let events = recorder.events.lock();
        let name = Name::try_from_str("W1").unwrap();
        assert_eq!(
            *events,
            vec![
                ObjectEvent::Added {
                    tag: "widget",
                    name: name.clone(),
                },
                ObjectEvent::Removed {
                    tag: "widget",
                    name,
                },
            ]
        );
    }

    #[test]
    fn census_counts_population() {
        let ns = MemoryNamespace::new();
        ns.create("W1", Widget::new).unwrap();
        ns.create("W2", Widget::new).unwrap();

        let census = ns.census();
        assert_eq!(census.types.len(), 1);
        assert_eq!(census.types[0].tag, "widget");
        assert_eq!(census.types[0].count, 2);

        let json = serde_json::to_string(&census).unwrap();
        assert!(json.contains("\"count\":2"));
    }

    #[test]
    fn iteration_survives_concurrent_create_and_destroy() {
        let ns = MemoryNamespace::new();
        for i in 0..50 {
            ns.create(&format!("S{i:03}"), Widget::new).unwrap();
        }

        thread::scope(|scope| {
            let churn = scope.spawn(|| {
                for i in 0..50 {
                    ns.create(&format!("T{i:03}"), Widget::new).unwrap();
                    ns.destroy_typed::<Widget>(&format!("S{i:03}")).unwrap();
                }
            });

            // already-yielded results stay coherent while the population churns
            for _ in 0..20 {
                let snapshot = ns.snapshot("widget");
                let keys: Vec<String> = snapshot
                    .iter()
                    .map(|e| e.ident().key().to_string())
                    .collect();
                let mut sorted = keys.clone();
                sorted.sort();
                assert_eq!(keys, sorted, "snapshot must stay name-ordered");
            }

            churn.join().unwrap();
        });

        assert_eq!(ns.census().types[0].count, 50);
    }
}
