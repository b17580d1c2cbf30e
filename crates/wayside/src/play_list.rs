//! Module: play_list
//! Responsibility: the camera play list entity and its typed helpers.

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
/// PlayList
///
/// Ordered sequence of cameras cycled on a video monitor. Entries are
/// weak references by name; a dangling entry is skipped at resolution,
/// never an error.
///

pub struct PlayList {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    seq_num: Option<u16>,
    entries: Vec<Name>,
}

impl PlayList {
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

    /// Camera names in cycle order.
    #[must_use]
    pub fn entries(&self) -> Vec<Name> {
        self.fields.read().entries.clone()
    }

    pub fn set_entries(&self, entries: Vec<Name>) {
        self.fields.write().entries = entries;
        self.notify.attribute(&self.ident, "entries");
    }

    /// Resolve entries to live cameras, preserving order and skipping
    /// dangling names.
    pub fn cameras(&self, handle: &NamespaceHandle) -> Vec<Arc<crate::camera::Camera>> {
        self.entries()
            .iter()
            .filter_map(|name| crate::camera::lookup(handle, name.as_str()))
            .collect()
    }
}

entity_kind!(PlayList, "play_list");

/// Look up a play list by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<PlayList>> {
    adapter::lookup(handle, name)
}

/// Iterate all play lists.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<PlayList>> + use<> {
    adapter::iter(handle)
}

/// The play list with the given selection number.
#[must_use]
pub fn find_seq(handle: &NamespaceHandle, seq_num: u16) -> Option<Arc<PlayList>> {
    adapter::find(handle, |p: &PlayList| p.seq_num() == Some(seq_num))
}
