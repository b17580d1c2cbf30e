//! Module: object
//! Responsibility: the named-object contract every registry-managed entity
//! implements, and the identity cell backing it.
//! Does not own: storage, notification fan-out, or typed narrowing.

use crate::{
    error::{Error, IdentityError},
    name::Name,
};
use std::{
    any::Any,
    sync::atomic::{AtomicBool, Ordering},
};

///
/// Ident
///
/// Per-object identity cell: the immutable `(type tag, name)` key plus a
/// detached flag raised when the object is destroyed. Constructed by the
/// namespace at creation time and embedded in every entity.
///

#[derive(Debug)]
pub struct Ident {
    tag: &'static str,
    name: Name,
    detached: AtomicBool,
}

impl Ident {
    #[must_use]
    pub const fn new(tag: &'static str, name: Name) -> Self {
        Self {
            tag,
            name,
            detached: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The unique key. Fails once the object has been destroyed; use
    /// [`key`](Self::key) for diagnostics that must not fail.
    pub fn name(&self) -> Result<&Name, IdentityError> {
        if self.is_detached() {
            return Err(IdentityError::Detached {
                tag: self.tag.to_string(),
                name: self.name.to_string(),
            });
        }

        Ok(&self.name)
    }

    /// Tombstone accessor: the identity key regardless of detachment.
    /// Diagnostics and event emission only; live code paths use
    /// [`name`](Self::name).
    #[must_use]
    pub const fn key(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }

    pub(crate) fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }
}

///
/// Tagged
///
/// Static half of the named-object contract: the constant type tag,
/// identical for every instance of a type and distinct across types.
///

pub trait Tagged {
    const TAG: &'static str;
}

///
/// Entity
///
/// Object-safe half of the named-object contract. Anything stored in the
/// namespace implements this; typed access goes through the adapter layer.
///

pub trait Entity: Any + Send + Sync {
    fn ident(&self) -> &Ident;

    fn tag(&self) -> &'static str {
        self.ident().tag()
    }

    fn name(&self) -> Result<Name, IdentityError> {
        self.ident().name().cloned()
    }

    /// Veto hook invoked before removal from the namespace. Returning an
    /// error leaves the object live and untouched.
    fn on_destroy(&self) -> Result<(), Error> {
        Ok(())
    }
}

///
/// EntityKind
///
/// Fully-bound entity type: named, tagged, and sized. Required only by
/// code performing typed narrowing.
///

pub trait EntityKind: Entity + Tagged + Sized {}
impl<T> EntityKind for T where T: Entity + Tagged + Sized {}

// entity_kind
//
// Implements `Tagged` + `Entity` for an entity struct holding its identity
// cell in a field named `ident`. Entities that veto destruction implement
// `Entity` by hand instead.
#[macro_export]
macro_rules! entity_kind {
    ($type:ty, $tag:literal) => {
        impl $crate::object::Tagged for $type {
            const TAG: &'static str = $tag;
        }

        impl $crate::object::Entity for $type {
            fn ident(&self) -> &$crate::object::Ident {
                &self.ident
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gadget {
        ident: Ident,
    }

    entity_kind!(Gadget, "gadget");

    fn gadget(name: &str) -> Gadget {
        Gadget {
            ident: Ident::new(Gadget::TAG, Name::try_from_str(name).unwrap()),
        }
    }

    #[test]
    fn tag_and_name_are_exposed() {
        let g = gadget("G12");
        assert_eq!(g.tag(), "gadget");
        assert_eq!(g.name().unwrap().as_str(), "G12");
    }

    #[test]
    fn name_fails_after_detach() {
        let g = gadget("G12");
        g.ident().detach();

        assert!(g.ident().is_detached());
        assert!(matches!(g.name(), Err(IdentityError::Detached { .. })));
        // tombstone accessor still answers
        assert_eq!(g.ident().key().as_str(), "G12");
    }
}
