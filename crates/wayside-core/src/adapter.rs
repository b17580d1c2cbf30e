//! Module: adapter
//! Responsibility: statically-typed narrowing over the generic namespace.
//! Every downcast in the crate lives here; entity helper modules are thin
//! delegations to these functions.
//!
//! All operations are client-safe: a detached handle yields `None`/empty
//! rather than failing. Server paths that must not run without a
//! namespace go through `NamespaceHandle::require` first. No caching:
//! every call re-queries the namespace.

use crate::{
    namespace::NamespaceHandle,
    object::{Entity, EntityKind},
};
use std::{
    any::Any,
    sync::Arc,
};

fn narrow<E: EntityKind>(entity: Arc<dyn Entity>) -> Option<Arc<E>> {
    let any: Arc<dyn Any + Send + Sync> = entity;
    any.downcast::<E>().ok()
}

/// Look up an entity of type `E` by name.
#[must_use]
pub fn lookup<E: EntityKind>(handle: &NamespaceHandle, name: &str) -> Option<Arc<E>> {
    let namespace = handle.get()?;
    narrow(namespace.lookup_object(E::TAG, name)?)
}

/// First entity of type `E` matching the checker, in name order.
pub fn find<E: EntityKind>(
    handle: &NamespaceHandle,
    mut checker: impl FnMut(&E) -> bool,
) -> Option<Arc<E>> {
    let namespace = handle.get()?;
    let found = namespace.find_object(E::TAG, &mut |entity| {
        let any: &dyn Any = entity;
        any.downcast_ref::<E>().is_some_and(&mut checker)
    })?;

    narrow(found)
}

/// Iterate a snapshot of type `E`'s population, in name order.
pub fn iter<E: EntityKind>(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<E>> + use<E> {
    handle
        .get()
        .map(|namespace| namespace.snapshot(E::TAG))
        .unwrap_or_default()
        .into_iter()
        .filter_map(narrow)
}

/// Number of live entities of type `E`.
#[must_use]
pub fn count<E: EntityKind>(handle: &NamespaceHandle) -> usize {
    iter::<E>(handle).count()
}
