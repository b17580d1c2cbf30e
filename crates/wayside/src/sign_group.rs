//! Module: sign_group
//! Responsibility: the sign group entity and its typed helpers.

use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

///
/// SignGroup
///
/// Named collection of signs targeted together by scheduled actions.
/// Membership is held by [`DmsSignGroup`](crate::dms_sign_group)
/// relation entities, never embedded here.
///

pub struct SignGroup {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    local: bool,
    hidden: bool,
}

impl SignGroup {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            fields: RwLock::new(Fields::default()),
        }
    }

    /// A local group holds exactly the signs of one site.
    #[must_use]
    pub fn local(&self) -> bool {
        self.fields.read().local
    }

    pub fn set_local(&self, local: bool) {
        self.fields.write().local = local;
        self.notify.attribute(&self.ident, "local");
    }

    #[must_use]
    pub fn hidden(&self) -> bool {
        self.fields.read().hidden
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.fields.write().hidden = hidden;
        self.notify.attribute(&self.ident, "hidden");
    }
}

entity_kind!(SignGroup, "sign_group");

/// Look up a sign group by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<SignGroup>> {
    adapter::lookup(handle, name)
}

/// Iterate all sign groups.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<SignGroup>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn hidden_groups_remain_listed() {
        let (ns, handle) = fixture();
        let group = ns.create("grp_94", SignGroup::new).unwrap();
        group.set_hidden(true);

        assert_eq!(iter(&handle).count(), 1);
        assert!(lookup(&handle, "grp_94").unwrap().hidden());
    }
}
