//! Module: dms_sign_group
//! Responsibility: the relation entity joining a sign to a sign group,
//! and its typed helpers.

use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

///
/// DmsSignGroup
///
/// One sign's membership in one group. Both ends are weak references by
/// name, resolved through the namespace on demand; membership is fixed
/// at creation and removed by destroying the relation.
///

pub struct DmsSignGroup {
    ident: Ident,
    dms: Name,
    sign_group: Name,
}

impl DmsSignGroup {
    // membership is immutable, so the notification handle is unused
    #[must_use]
    pub fn new(ident: Ident, _notify: Notify, dms: Name, sign_group: Name) -> Self {
        Self {
            ident,
            dms,
            sign_group,
        }
    }

    #[must_use]
    pub const fn dms(&self) -> &Name {
        &self.dms
    }

    #[must_use]
    pub const fn sign_group(&self) -> &Name {
        &self.sign_group
    }

    /// Resolve the sign end of the relation.
    #[must_use]
    pub fn dms_entity(&self, handle: &NamespaceHandle) -> Option<Arc<crate::dms::Dms>> {
        crate::dms::lookup(handle, self.dms.as_str())
    }

    /// Resolve the group end of the relation.
    #[must_use]
    pub fn sign_group_entity(
        &self,
        handle: &NamespaceHandle,
    ) -> Option<Arc<crate::sign_group::SignGroup>> {
        crate::sign_group::lookup(handle, self.sign_group.as_str())
    }
}

entity_kind!(DmsSignGroup, "dms_sign_group");

/// Look up a relation by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<DmsSignGroup>> {
    adapter::lookup(handle, name)
}

/// The relation joining `dms` to `sign_group`, if present.
#[must_use]
pub fn find(handle: &NamespaceHandle, dms: &Name, sign_group: &Name) -> Option<Arc<DmsSignGroup>> {
    adapter::find(handle, |r: &DmsSignGroup| {
        r.dms() == dms && r.sign_group() == sign_group
    })
}

/// Names of all signs in `sign_group`, in relation-name order.
pub fn dms_in_group(handle: &NamespaceHandle, sign_group: &Name) -> Vec<Name> {
    adapter::iter::<DmsSignGroup>(handle)
        .filter(|r| r.sign_group() == sign_group)
        .map(|r| r.dms().clone())
        .collect()
}
