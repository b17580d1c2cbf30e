//! Module: detector
//! Responsibility: the vehicle detector entity and its typed helpers.

use crate::enums::LaneType;
use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    io::{ControllerIo, IoSlot},
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
    style::ItemStyle,
};

///
/// Detector
///
/// Single loop or sensor input sampling one lane. Abandoned detectors
/// stay in the namespace for historical data but drop out of the active
/// styles.
///

pub struct Detector {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

struct Fields {
    lane_type: LaneType,
    lane_number: u8,
    abandoned: bool,
    force_fail: bool,
}

impl Detector {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            fields: RwLock::new(Fields {
                lane_type: LaneType::None,
                lane_number: 0,
                abandoned: false,
                force_fail: false,
            }),
        }
    }

    #[must_use]
    pub fn lane_type(&self) -> LaneType {
        self.fields.read().lane_type
    }

    pub fn set_lane_type(&self, lane_type: LaneType) {
        self.fields.write().lane_type = lane_type;
        self.notify.attribute(&self.ident, "lane_type");
    }

    #[must_use]
    pub fn lane_number(&self) -> u8 {
        self.fields.read().lane_number
    }

    pub fn set_lane_number(&self, lane_number: u8) {
        self.fields.write().lane_number = lane_number;
        self.notify.attribute(&self.ident, "lane_number");
    }

    #[must_use]
    pub fn abandoned(&self) -> bool {
        self.fields.read().abandoned
    }

    pub fn set_abandoned(&self, abandoned: bool) {
        self.fields.write().abandoned = abandoned;
        self.notify.attribute(&self.ident, "abandoned");
    }

    /// Force the detector to be treated as failed regardless of data.
    #[must_use]
    pub fn force_fail(&self) -> bool {
        self.fields.read().force_fail
    }

    pub fn set_force_fail(&self, force_fail: bool) {
        self.fields.write().force_fail = force_fail;
        self.notify.attribute(&self.ident, "force_fail");
    }

    /// Whether the detector currently contributes samples.
    #[must_use]
    pub fn is_sampling(&self) -> bool {
        let fields = self.fields.read();

        !fields.abandoned && !fields.force_fail && fields.lane_type != LaneType::None
    }
}

entity_kind!(Detector, "detector");

impl ControllerIo for Detector {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        if self.abandoned() {
            styles.remove(ItemStyle::AVAILABLE);
            styles |= ItemStyle::INACTIVE;
        }
        if self.force_fail() {
            styles.remove(ItemStyle::AVAILABLE);
            styles |= ItemStyle::FAILED;
        }

        styles
    }
}

/// Look up a detector by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Detector>> {
    adapter::lookup(handle, name)
}

/// First detector matching the checker.
pub fn find(
    handle: &NamespaceHandle,
    checker: impl FnMut(&Detector) -> bool,
) -> Option<Arc<Detector>> {
    adapter::find(handle, checker)
}

/// Iterate all detectors.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Detector>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{active_controller, fixture};

    #[test]
    fn sampling_requires_live_lane() {
        let (ns, _handle) = fixture();
        let det = ns.create("det_1", Detector::new).unwrap();

        assert!(!det.is_sampling());
        det.set_lane_type(LaneType::Mainline);
        det.set_lane_number(2);
        assert!(det.is_sampling());

        det.set_abandoned(true);
        assert!(!det.is_sampling());
    }

    #[test]
    fn styles_recompute_on_every_read() {
        let (ns, _handle) = fixture();
        let ctl = active_controller(&ns, "ctl_1");
        let det = ns.create("det_1", Detector::new).unwrap();
        det.set_pin(39).unwrap();
        det.set_controller(Some(ctl)).unwrap();

        assert!(det.styles().contains(ItemStyle::AVAILABLE));

        det.set_force_fail(true);
        let styles = det.styles();
        assert!(styles.contains(ItemStyle::FAILED));
        assert!(!styles.contains(ItemStyle::AVAILABLE));

        det.set_force_fail(false);
        assert!(det.styles().contains(ItemStyle::AVAILABLE));
    }
}
