//! Module: lcs_indication
//! Responsibility: one indication output of a lane-use control signal,
//! and its typed helpers.

use crate::enums::LaneUseIndication;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    io::{ControllerIo, IoSlot},
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

///
/// LcsIndication
///
/// Wires one displayable indication of a lane-use control signal to a
/// controller pin. The signal itself is a sign entity referenced by
/// name; both the reference and the indication are fixed at creation.
///

pub struct LcsIndication {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    lcs: Name,
    indication: LaneUseIndication,
}

impl LcsIndication {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify, lcs: Name, indication: LaneUseIndication) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            lcs,
            indication,
        }
    }

    /// Name of the owning lane-use control signal.
    #[must_use]
    pub const fn lcs(&self) -> &Name {
        &self.lcs
    }

    #[must_use]
    pub const fn indication(&self) -> LaneUseIndication {
        self.indication
    }

    /// Resolve the owning signal through the namespace.
    #[must_use]
    pub fn lcs_entity(&self, handle: &NamespaceHandle) -> Option<Arc<crate::dms::Dms>> {
        crate::dms::lookup(handle, self.lcs.as_str())
    }
}

entity_kind!(LcsIndication, "lcs_indication");

impl ControllerIo for LcsIndication {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }
}

/// Look up an indication by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<LcsIndication>> {
    adapter::lookup(handle, name)
}

/// The output wiring `indication` on the named signal, if configured.
#[must_use]
pub fn find(
    handle: &NamespaceHandle,
    lcs: &Name,
    indication: LaneUseIndication,
) -> Option<Arc<LcsIndication>> {
    adapter::find(handle, |i: &LcsIndication| {
        i.lcs() == lcs && i.indication() == indication
    })
}

/// Indications configured for the named signal, in name order.
pub fn indications(handle: &NamespaceHandle, lcs: &Name) -> Vec<LaneUseIndication> {
    adapter::iter::<LcsIndication>(handle)
        .filter(|i| i.lcs() == lcs)
        .map(|i| i.indication())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{active_controller, fixture};

    #[test]
    fn indications_enumerate_per_signal() {
        let (ns, handle) = fixture();
        let ctl = active_controller(&ns, "ctl_1");
        let lcs = Name::try_from_str("lcs_1").unwrap();

        for (n, (pin, ind)) in [
            ("lcs_1_dark", (20, LaneUseIndication::Dark)),
            ("lcs_1_open", (21, LaneUseIndication::LaneOpen)),
            ("lcs_1_closed", (22, LaneUseIndication::LaneClosed)),
        ] {
            let out = ns
                .create(n, |ident, notify| {
                    LcsIndication::new(ident, notify, lcs.clone(), ind)
                })
                .unwrap();
            out.set_pin(pin).unwrap();
            out.set_controller(Some(ctl.clone())).unwrap();
        }

        let configured = indications(&handle, &lcs);
        assert_eq!(configured.len(), 3);
        assert!(configured.contains(&LaneUseIndication::LaneClosed));
        assert!(find(&handle, &lcs, LaneUseIndication::LaneOpen).is_some());
        assert!(find(&handle, &lcs, LaneUseIndication::MergeLeft).is_none());
    }
}
