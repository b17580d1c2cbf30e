//! Module: namespace
//! Responsibility: the consumed object-namespace capability and the
//! injected handle through which all helpers reach it.
//! Does not own: the live population (see `memory`) or typed narrowing
//! (see `adapter`).

use crate::{
    error::IdentityError,
    object::Entity,
};
use std::sync::Arc;

///
/// Checker
///
/// Side-effect-free predicate over a type's population, used for ad-hoc
/// search. Invoked zero or more times; must not mutate the namespace.
/// Panics propagate to the caller unmodified.
///

pub type Checker<'a> = &'a mut dyn FnMut(&dyn Entity) -> bool;

///
/// Namespace
///
/// Process-wide, type-partitioned store of live objects. Implemented by
/// the persistence/replication collaborator; [`MemoryNamespace`]
/// (crate::memory::MemoryNamespace) is the in-process implementation.
///
/// Absence is a normal outcome everywhere: no operation here fails on a
/// missing tag or name.
///

pub trait Namespace: Send + Sync {
    /// Exact-match lookup by `(tag, name)`.
    fn lookup_object(&self, tag: &str, name: &str) -> Option<Arc<dyn Entity>>;

    /// First entity of the type matching the checker, in name order.
    fn find_object(&self, tag: &str, checker: Checker<'_>) -> Option<Arc<dyn Entity>>;

    /// Snapshot of the type's population, in name order. Iteration over
    /// the snapshot is unaffected by concurrent mutation; entities
    /// destroyed afterwards remain in the snapshot but report detached.
    fn snapshot(&self, tag: &str) -> Vec<Arc<dyn Entity>>;
}

///
/// NamespaceHandle
///
/// Explicitly injected namespace reference: created once at process start,
/// torn down at shutdown, never reassigned mid-run (test harnesses may
/// substitute a fake). A detached handle models a client whose session has
/// not been established yet.
///

#[derive(Clone, Default)]
pub struct NamespaceHandle(Option<Arc<dyn Namespace>>);

impl NamespaceHandle {
    #[must_use]
    pub fn attached(namespace: Arc<dyn Namespace>) -> Self {
        Self(Some(namespace))
    }

    /// Handle with no namespace behind it.
    #[must_use]
    pub const fn detached() -> Self {
        Self(None)
    }

    /// Client-safe access: `None` while the session is not established.
    #[must_use]
    pub fn get(&self) -> Option<&Arc<dyn Namespace>> {
        self.0.as_ref()
    }

    /// Server-side access: an absent namespace is a configuration fault,
    /// not a tolerable state.
    pub fn require(&self) -> Result<&Arc<dyn Namespace>, IdentityError> {
        self.0.as_ref().ok_or(IdentityError::NamespaceUnavailable)
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_handle_is_client_safe() {
        let handle = NamespaceHandle::detached();
        assert!(!handle.is_attached());
        assert!(handle.get().is_none());
        assert!(matches!(
            handle.require(),
            Err(IdentityError::NamespaceUnavailable)
        ));
    }
}
