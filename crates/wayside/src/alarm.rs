//! Module: alarm
//! Responsibility: the alarm entity, a digital input on a controller
//! pin, and its typed helpers.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter,
    error::{ConflictError, Error},
    io::{ControllerIo, IoSlot},
    namespace::NamespaceHandle,
    notify::Notify,
    object::{Entity, Ident, Tagged},
    style::ItemStyle,
};

///
/// Alarm
///
/// Reads a digital input wired to a controller pin. `state` latches the
/// most recent reading; `trigger_time` stamps the latest rising edge.
///

pub struct Alarm {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    description: String,
    state: bool,
    trigger_time: Option<DateTime<Utc>>,
}

impl Alarm {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            fields: RwLock::new(Fields::default()),
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
    pub fn state(&self) -> bool {
        self.fields.read().state
    }

    /// Controller-driven state update; not writable by clients. A rising
    /// edge stamps the trigger time.
    pub fn set_state_notify(&self, state: bool) {
        {
            let mut fields = self.fields.write();
            if fields.state == state {
                return;
            }
            fields.state = state;
            if state {
                fields.trigger_time = Some(Utc::now());
            }
        }
        self.notify.attribute(&self.ident, "state");
        if state {
            self.notify.attribute(&self.ident, "trigger_time");
        }
    }

    /// Most recent trigger time.
    #[must_use]
    pub fn trigger_time(&self) -> Option<DateTime<Utc>> {
        self.fields.read().trigger_time
    }
}

impl Tagged for Alarm {
    const TAG: &'static str = "alarm";
}

impl Entity for Alarm {
    fn ident(&self) -> &Ident {
        &self.ident
    }

    fn on_destroy(&self) -> Result<(), Error> {
        // the controller pin table would go stale otherwise
        if self.io.controller().is_some() {
            return Err(ConflictError::Bound {
                tag: Self::TAG,
                name: self.ident.key().clone(),
            }
            .into());
        }

        Ok(())
    }
}

impl ControllerIo for Alarm {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        if self.state() {
            styles |= ItemStyle::DEPLOYED;
        }

        styles
    }
}

/// Look up an alarm by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Alarm>> {
    adapter::lookup(handle, name)
}

/// First alarm matching the checker.
pub fn find(handle: &NamespaceHandle, checker: impl FnMut(&Alarm) -> bool) -> Option<Arc<Alarm>> {
    adapter::find(handle, checker)
}

/// Iterate all alarms.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Alarm>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{active_controller, fixture};

    #[test]
    fn trigger_stamps_time_once_per_edge() {
        let (ns, _handle) = fixture();
        let alarm = ns.create("alm_1", Alarm::new).unwrap();

        assert!(alarm.trigger_time().is_none());
        alarm.set_state_notify(true);
        let first = alarm.trigger_time().unwrap();

        // repeated set at the same level does not restamp
        alarm.set_state_notify(true);
        assert_eq!(alarm.trigger_time().unwrap(), first);

        alarm.set_state_notify(false);
        assert_eq!(alarm.trigger_time().unwrap(), first);
    }

    #[test]
    fn styles_track_trigger_state() {
        let (ns, _handle) = fixture();
        let ctl = active_controller(&ns, "ctl_1");
        let alarm = ns.create("alm_1", Alarm::new).unwrap();
        alarm.set_pin(10).unwrap();
        alarm.set_controller(Some(ctl)).unwrap();

        assert!(!alarm.styles().contains(ItemStyle::DEPLOYED));
        alarm.set_state_notify(true);
        assert!(alarm.styles().contains(ItemStyle::DEPLOYED));
    }

    #[test]
    fn destroy_is_vetoed_while_bound() {
        let (ns, _handle) = fixture();
        let ctl = active_controller(&ns, "ctl_1");
        let alarm = ns.create("alm_1", Alarm::new).unwrap();
        alarm.set_pin(10).unwrap();
        alarm.set_controller(Some(ctl)).unwrap();

        let err = ns.destroy_typed::<Alarm>("alm_1").unwrap_err();
        assert!(matches!(err, Error::Conflict(ConflictError::Bound { .. })));
        assert!(lookup_is_live(&ns));

        alarm.clear_io().unwrap();
        ns.destroy_typed::<Alarm>("alm_1").unwrap();
    }

    fn lookup_is_live(ns: &Arc<wayside_core::memory::MemoryNamespace>) -> bool {
        use wayside_core::namespace::Namespace;
        ns.lookup_object(Alarm::TAG, "alm_1").is_some()
    }
}
