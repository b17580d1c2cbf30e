//! Test-only fixtures shared across entity test modules.

use crate::{controller::Controller, enums::CtrlCondition};
use std::sync::Arc;
use wayside_core::{memory::MemoryNamespace, namespace::NamespaceHandle};

/// Fresh namespace plus an attached handle.
pub(crate) fn fixture() -> (Arc<MemoryNamespace>, NamespaceHandle) {
    let ns = MemoryNamespace::new();
    let handle = NamespaceHandle::attached(ns.clone());

    (ns, handle)
}

/// Controller in the active condition, ready to accept pin claims.
pub(crate) fn active_controller(ns: &Arc<MemoryNamespace>, name: &str) -> Arc<Controller> {
    let ctl = ns.create(name, Controller::new).unwrap();
    ctl.set_condition(CtrlCondition::Active);

    ctl
}
