//! Module: controller
//! Responsibility: the controller entity, a device endpoint with
//! addressable I/O pins, and its typed helpers.

use crate::enums::CtrlCondition;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter,
    error::{ConflictError, Error},
    io::{ALL_PINS, IoPins, IoRef, PinTable},
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::{Entity, Ident, Tagged},
};

///
/// Controller
///
/// Field cabinet endpoint on a communication link. Owns the pin table
/// that serializes every conflict check against it; controller-attached
/// entities claim pins through [`IoPins`].
///

pub struct Controller {
    ident: Ident,
    notify: Notify,
    pins: PinTable,
    fields: RwLock<Fields>,
}

struct Fields {
    comm_link: Option<Name>,
    drop_id: u16,
    condition: CtrlCondition,
    notes: String,
    fail_time: Option<DateTime<Utc>>,
}

impl Controller {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            pins: PinTable::new(),
            fields: RwLock::new(Fields {
                comm_link: None,
                drop_id: 0,
                condition: CtrlCondition::Planned,
                notes: String::new(),
                fail_time: None,
            }),
        }
    }

    /// Name of the communication link, resolved through the namespace.
    #[must_use]
    pub fn comm_link(&self) -> Option<Name> {
        self.fields.read().comm_link.clone()
    }

    pub fn set_comm_link(&self, comm_link: Option<Name>) {
        self.fields.write().comm_link = comm_link;
        self.notify.attribute(&self.ident, "comm_link");
    }

    /// Drop address on the communication link.
    #[must_use]
    pub fn drop_id(&self) -> u16 {
        self.fields.read().drop_id
    }

    pub fn set_drop_id(&self, drop_id: u16) {
        self.fields.write().drop_id = drop_id;
        self.notify.attribute(&self.ident, "drop_id");
    }

    #[must_use]
    pub fn condition(&self) -> CtrlCondition {
        self.fields.read().condition
    }

    pub fn set_condition(&self, condition: CtrlCondition) {
        self.fields.write().condition = condition;
        self.notify.attribute(&self.ident, "condition");
    }

    #[must_use]
    pub fn notes(&self) -> String {
        self.fields.read().notes.clone()
    }

    pub fn set_notes(&self, notes: &str) {
        self.fields.write().notes = notes.to_string();
        self.notify.attribute(&self.ident, "notes");
    }

    /// Time of the most recent communication failure, cleared on
    /// successful polling. Driven by the poller, not by clients.
    #[must_use]
    pub fn fail_time(&self) -> Option<DateTime<Utc>> {
        self.fields.read().fail_time
    }

    pub fn set_fail_time_notify(&self, fail_time: Option<DateTime<Utc>>) {
        {
            let mut fields = self.fields.write();
            if fields.fail_time == fail_time {
                return;
            }
            fields.fail_time = fail_time;
        }
        self.notify.attribute(&self.ident, "fail_time");
    }

    /// Snapshot of current pin assignments, pin order.
    #[must_use]
    pub fn io_assignments(&self) -> Vec<(u16, IoRef)> {
        self.pins.assignments()
    }
}

impl Tagged for Controller {
    const TAG: &'static str = "controller";
}

impl Entity for Controller {
    fn ident(&self) -> &Ident {
        &self.ident
    }

    fn on_destroy(&self) -> Result<(), Error> {
        // the pin table would orphan its occupants
        if !self.pins.is_empty() {
            return Err(ConflictError::Bound {
                tag: Self::TAG,
                name: self.ident.key().clone(),
            }
            .into());
        }

        Ok(())
    }
}

impl IoPins for Controller {
    fn max_pin(&self) -> u16 {
        ALL_PINS
    }

    fn claim_pin(&self, pin: u16, io: &IoRef) -> Result<(), ConflictError> {
        self.pins.claim(&self.ident, pin, io)
    }

    fn release_pin(&self, pin: u16, io: &IoRef) {
        self.pins.release(pin, io);
    }

    fn move_pin(&self, old: u16, new: u16, io: &IoRef) -> Result<(), ConflictError> {
        self.pins.shift(&self.ident, old, new, io)
    }

    fn pin_occupant(&self, pin: u16) -> Option<IoRef> {
        self.pins.occupant(pin)
    }

    fn is_active(&self) -> bool {
        self.condition() == CtrlCondition::Active
    }

    fn is_failed(&self) -> bool {
        self.fail_time().is_some()
    }
}

/// Look up a controller by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Controller>> {
    adapter::lookup(handle, name)
}

/// First controller matching the checker.
pub fn find(
    handle: &NamespaceHandle,
    checker: impl FnMut(&Controller) -> bool,
) -> Option<Arc<Controller>> {
    adapter::find(handle, checker)
}

/// Iterate all controllers.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Controller>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn new_controller_is_planned_and_inactive() {
        let (ns, handle) = fixture();
        ns.create("ctl_1", Controller::new).unwrap();

        let ctl = lookup(&handle, "ctl_1").unwrap();
        assert_eq!(ctl.condition(), CtrlCondition::Planned);
        assert!(!ctl.is_active());
        assert!(!ctl.is_failed());

        ctl.set_condition(CtrlCondition::Active);
        assert!(ctl.is_active());
    }

    #[test]
    fn fail_time_marks_controller_failed() {
        let (ns, _handle) = fixture();
        let ctl = ns.create("ctl_1", Controller::new).unwrap();

        ctl.set_fail_time_notify(Some(chrono::Utc::now()));
        assert!(ctl.is_failed());
        ctl.set_fail_time_notify(None);
        assert!(!ctl.is_failed());
    }

    #[test]
    fn find_by_comm_link() {
        let (ns, handle) = fixture();
        let a = ns.create("ctl_a", Controller::new).unwrap();
        ns.create("ctl_b", Controller::new).unwrap();
        a.set_comm_link(Some(Name::try_from_str("link_1").unwrap()));

        let found = find(&handle, |c| c.comm_link().is_some()).unwrap();
        assert_eq!(found.name().unwrap().as_str(), "ctl_a");
    }
}
