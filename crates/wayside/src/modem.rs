//! Module: modem
//! Responsibility: the dial-up modem entity and its typed helpers.

use crate::enums::ModemState;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;
use wayside_core::{
    adapter, entity_kind,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

///
/// Modem
///
/// Shared dial-up modem. `state` is driven by the poller; clients only
/// toggle `enabled`.
///

pub struct Modem {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

struct Fields {
    uri: String,
    config: String,
    state: ModemState,
    enabled: bool,
}

impl Modem {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            fields: RwLock::new(Fields {
                uri: String::new(),
                config: String::new(),
                state: ModemState::Offline,
                enabled: true,
            }),
        }
    }

    #[must_use]
    pub fn uri(&self) -> String {
        self.fields.read().uri.clone()
    }

    pub fn set_uri(&self, uri: &str) {
        self.fields.write().uri = uri.to_string();
        self.notify.attribute(&self.ident, "uri");
    }

    /// Modem initialization string.
    #[must_use]
    pub fn config(&self) -> String {
        self.fields.read().config.clone()
    }

    pub fn set_config(&self, config: &str) {
        self.fields.write().config = config.to_string();
        self.notify.attribute(&self.ident, "config");
    }

    #[must_use]
    pub fn state(&self) -> ModemState {
        self.fields.read().state
    }

    /// Poller-driven state transition; not writable by clients.
    pub fn set_state_notify(&self, state: ModemState) {
        {
            let mut fields = self.fields.write();
            if fields.state == state {
                return;
            }
            fields.state = state;
        }
        if state.is_error() {
            warn!(modem = %self.ident.key(), %state, "modem error");
        }
        self.notify.attribute(&self.ident, "state");
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.fields.read().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.fields.write().enabled = enabled;
        self.notify.attribute(&self.ident, "enabled");
    }
}

entity_kind!(Modem, "modem");

/// Look up a modem by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Modem>> {
    adapter::lookup(handle, name)
}

/// Iterate all modems.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Modem>> + use<> {
    adapter::iter(handle)
}

/// First enabled modem resting offline, ready to dial.
#[must_use]
pub fn find_available(handle: &NamespaceHandle) -> Option<Arc<Modem>> {
    adapter::find(handle, |m: &Modem| {
        m.enabled() && m.state() == ModemState::Offline
    })
}
