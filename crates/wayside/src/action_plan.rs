//! Module: action_plan
//! Responsibility: the action plan entity and its typed helpers.
//! Scheduling semantics (when phases change) belong to the scheduler
//! collaborator; the registry carries the plan state it publishes.

use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

/// Phase every plan starts in.
pub const PHASE_UNDEPLOYED: &str = "undeployed";

///
/// ActionPlan
///
/// Named plan grouping device actions behind a shared phase. Operators
/// toggle `active`; the scheduler advances `phase`.
///

pub struct ActionPlan {
    ident: Ident,
    notify: Notify,
    fields: RwLock<Fields>,
}

struct Fields {
    description: String,
    sync_actions: bool,
    sticky: bool,
    active: bool,
    phase: String,
}

impl ActionPlan {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            fields: RwLock::new(Fields {
                description: String::new(),
                sync_actions: false,
                sticky: false,
                active: false,
                phase: PHASE_UNDEPLOYED.to_string(),
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

    /// Whether all actions must validate before a phase change commits.
    #[must_use]
    pub fn sync_actions(&self) -> bool {
        self.fields.read().sync_actions
    }

    pub fn set_sync_actions(&self, sync_actions: bool) {
        self.fields.write().sync_actions = sync_actions;
        self.notify.attribute(&self.ident, "sync_actions");
    }

    /// Sticky plans survive a server restart deployed.
    #[must_use]
    pub fn sticky(&self) -> bool {
        self.fields.read().sticky
    }

    pub fn set_sticky(&self, sticky: bool) {
        self.fields.write().sticky = sticky;
        self.notify.attribute(&self.ident, "sticky");
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.fields.read().active
    }

    pub fn set_active(&self, active: bool) {
        {
            let mut fields = self.fields.write();
            if fields.active == active {
                return;
            }
            fields.active = active;
            if !active {
                fields.phase = PHASE_UNDEPLOYED.to_string();
            }
        }
        self.notify.attribute(&self.ident, "active");
    }

    #[must_use]
    pub fn phase(&self) -> String {
        self.fields.read().phase.clone()
    }

    /// Scheduler-driven phase change; not writable by clients.
    pub fn set_phase_notify(&self, phase: &str) {
        {
            let mut fields = self.fields.write();
            if fields.phase == phase {
                return;
            }
            fields.phase = phase.to_string();
        }
        self.notify.attribute(&self.ident, "phase");
    }
}

entity_kind!(ActionPlan, "action_plan");

/// Look up an action plan by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<ActionPlan>> {
    adapter::lookup(handle, name)
}

/// Iterate all action plans.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<ActionPlan>> + use<> {
    adapter::iter(handle)
}

/// Iterate plans currently active.
pub fn iter_active(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<ActionPlan>> + use<> {
    iter(handle).filter(|p| p.active())
}
