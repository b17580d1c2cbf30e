//! Module: comm_link
//! Responsibility: the communication link entity and its typed helpers.

use crate::enums::CommProtocol;
use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

/// Default polling period in seconds.
pub const DEF_POLL_PERIOD_SEC: u32 = 30;

///
/// CommLink
///
/// Shared channel (serial line, socket, dial-up path) carrying one or
/// more controllers. Controllers reference a link by name.
///

pub struct CommLink {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

struct Fields {
    description: String,
    uri: String,
    protocol: Option<CommProtocol>,
    poll_enabled: bool,
    poll_period_sec: u32,
}

impl CommLink {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            fields: RwLock::new(Fields {
                description: String::new(),
                uri: String::new(),
                protocol: None,
                poll_enabled: false,
                poll_period_sec: DEF_POLL_PERIOD_SEC,
            }),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.fields.read().description.clone()
    }

    pub fn set_description(&self, description: &str) {
        self.fields.write().description = description.to_string();
        self.notify.attribute(&self.ident, "description");
    }

    #[must_use]
    pub fn uri(&self) -> String {
        self.fields.read().uri.clone()
    }

    pub fn set_uri(&self, uri: &str) {
        self.fields.write().uri = uri.to_string();
        self.notify.attribute(&self.ident, "uri");
    }

    /// Protocol spoken on the link; `None` until configured (or when a
    /// persisted ordinal was unknown).
    #[must_use]
    pub fn protocol(&self) -> Option<CommProtocol> {
        self.fields.read().protocol
    }

    pub fn set_protocol(&self, protocol: Option<CommProtocol>) {
        self.fields.write().protocol = protocol;
        self.notify.attribute(&self.ident, "protocol");
    }

    #[must_use]
    pub fn poll_enabled(&self) -> bool {
        self.fields.read().poll_enabled
    }

    pub fn set_poll_enabled(&self, poll_enabled: bool) {
        self.fields.write().poll_enabled = poll_enabled;
        self.notify.attribute(&self.ident, "poll_enabled");
    }

    #[must_use]
    pub fn poll_period_sec(&self) -> u32 {
        self.fields.read().poll_period_sec
    }

    pub fn set_poll_period_sec(&self, period: u32) {
        self.fields.write().poll_period_sec = period;
        self.notify.attribute(&self.ident, "poll_period_sec");
    }
}

entity_kind!(CommLink, "comm_link");

/// Look up a communication link by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<CommLink>> {
    adapter::lookup(handle, name)
}

/// Iterate all communication links.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<CommLink>> + use<> {
    adapter::iter(handle)
}

/// Controllers attached to the named link, in name order.
pub fn controllers(handle: &NamespaceHandle, link: &Name) -> Vec<Arc<crate::controller::Controller>> {
    crate::controller::iter(handle)
        .filter(|c| c.comm_link().as_ref() == Some(link))
        .collect()
}
