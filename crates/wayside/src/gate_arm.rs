//! Module: gate_arm
//! Responsibility: the gate arm entity and its typed helpers.

use crate::enums::GateArmState;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;
use wayside_core::{
    adapter, entity_kind,
    io::{ControllerIo, IoSlot},
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
    style::ItemStyle,
};

///
/// GateArm
///
/// Ramp gate arm. `arm_state` is reported by the device poller; opening
/// and closing commands belong to the device-protocol collaborator.
///

pub struct GateArm {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

struct Fields {
    arm_state: GateArmState,
    notes: String,
}

impl GateArm {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            fields: RwLock::new(Fields {
                arm_state: GateArmState::Unknown,
                notes: String::new(),
            }),
        }
    }

    #[must_use]
    pub fn arm_state(&self) -> GateArmState {
        self.fields.read().arm_state
    }

    /// Poller-driven state transition; not writable by clients.
    pub fn set_arm_state_notify(&self, arm_state: GateArmState) {
        {
            let mut fields = self.fields.write();
            if fields.arm_state == arm_state {
                return;
            }
            fields.arm_state = arm_state;
        }
        debug!(gate_arm = %self.ident.key(), state = %arm_state, "arm state");
        self.notify.attribute(&self.ident, "arm_state");
    }

    #[must_use]
    pub fn notes(&self) -> String {
        self.fields.read().notes.clone()
    }

    pub fn set_notes(&self, notes: &str) {
        self.fields.write().notes = notes.to_string();
        self.notify.attribute(&self.ident, "notes");
    }
}

entity_kind!(GateArm, "gate_arm");

impl ControllerIo for GateArm {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        let state = self.arm_state();
        match state {
            GateArmState::Open => styles |= ItemStyle::OPEN,
            GateArmState::Closed => styles |= ItemStyle::CLOSED,
            _ => {}
        }
        if state.is_moving() {
            styles |= ItemStyle::MOVING;
        }
        if state.is_fault() {
            styles.remove(ItemStyle::AVAILABLE);
            styles |= ItemStyle::FAILED;
        }

        styles
    }
}

/// Look up a gate arm by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<GateArm>> {
    adapter::lookup(handle, name)
}

/// Iterate all gate arms.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<GateArm>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn styles_track_arm_state() {
        let (ns, _handle) = fixture();
        let gate = ns.create("gate_1", GateArm::new).unwrap();

        gate.set_arm_state_notify(GateArmState::Opening);
        assert!(gate.styles().contains(ItemStyle::MOVING));

        gate.set_arm_state_notify(GateArmState::Open);
        assert!(gate.styles().contains(ItemStyle::OPEN));
        assert!(!gate.styles().contains(ItemStyle::MOVING));

        gate.set_arm_state_notify(GateArmState::Timeout);
        assert!(gate.styles().contains(ItemStyle::FAILED));
    }
}
