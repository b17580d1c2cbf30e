//! Module: catalog
//! Responsibility: the catalog entity, an ordered sequence of play
//! lists, and its typed helpers.

use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

///
/// Catalog
///
/// Ordered collection of play lists selectable as one unit on a video
/// monitor. Members are weak references by name, resolved on demand.
///

pub struct Catalog {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    seq_num: Option<u16>,
    play_lists: Vec<Name>,
}

impl Catalog {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            fields: RwLock::new(Fields::default()),
        }
    }

    /// Selection number on monitor keypads.
    #[must_use]
    pub fn seq_num(&self) -> Option<u16> {
        self.fields.read().seq_num
    }

    pub fn set_seq_num(&self, seq_num: Option<u16>) {
        self.fields.write().seq_num = seq_num;
        self.notify.attribute(&self.ident, "seq_num");
    }

    /// Member play-list names, in order.
    #[must_use]
    pub fn play_list_names(&self) -> Vec<Name> {
        self.fields.read().play_lists.clone()
    }

    pub fn set_play_list_names(&self, play_lists: Vec<Name>) {
        self.fields.write().play_lists = play_lists;
        self.notify.attribute(&self.ident, "play_lists");
    }

    /// Resolve members to live play lists, preserving order and skipping
    /// dangling names.
    pub fn play_lists(&self, handle: &NamespaceHandle) -> Vec<Arc<crate::play_list::PlayList>> {
        self.play_list_names()
            .iter()
            .filter_map(|name| crate::play_list::lookup(handle, name.as_str()))
            .collect()
    }
}

entity_kind!(Catalog, "catalog");

/// Look up a catalog by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Catalog>> {
    adapter::lookup(handle, name)
}

/// Iterate all catalogs.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Catalog>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{play_list::PlayList, test_fixtures::fixture};
    use wayside_core::object::Entity;

    #[test]
    fn catalog_resolves_member_play_lists_in_order() {
        let (ns, handle) = fixture();
        ns.create("pl_2", PlayList::new).unwrap();
        ns.create("pl_1", PlayList::new).unwrap();

        let catalog = ns.create("cat_1", Catalog::new).unwrap();
        catalog.set_play_list_names(
            ["pl_2", "pl_1"]
                .iter()
                .map(|n| Name::try_from_str(n).unwrap())
                .collect(),
        );

        let members = catalog.play_lists(&handle);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].ident().key().as_str(), "pl_2");
    }
}
