//! Module: ramp_meter
//! Responsibility: the ramp meter entity and its typed helpers.

use crate::enums::{RampMeterQueue, RampMeterType};
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

/// Default maximum wait before the queue must be flushed, in seconds.
pub const DEF_MAX_WAIT_SEC: u32 = 240;

///
/// RampMeter
///
/// Meters vehicles entering a ramp. `rate` is the active release rate in
/// vehicles per hour, present only while metering; `queue` mirrors the
/// upstream queue detector. Timing algorithms live downstream.
///

pub struct RampMeter {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

struct Fields {
    meter_type: Option<RampMeterType>,
    storage_ft: u32,
    max_wait_sec: u32,
    am_target: u32,
    pm_target: u32,
    rate: Option<u32>,
    queue: RampMeterQueue,
}

impl RampMeter {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            fields: RwLock::new(Fields {
                meter_type: None,
                storage_ft: 0,
                max_wait_sec: DEF_MAX_WAIT_SEC,
                am_target: 0,
                pm_target: 0,
                rate: None,
                queue: RampMeterQueue::Unknown,
            }),
        }
    }

    /// Lane configuration; `None` until configured.
    #[must_use]
    pub fn meter_type(&self) -> Option<RampMeterType> {
        self.fields.read().meter_type
    }

    pub fn set_meter_type(&self, meter_type: Option<RampMeterType>) {
        self.fields.write().meter_type = meter_type;
        self.notify.attribute(&self.ident, "meter_type");
    }

    /// Queue storage space on the ramp, in feet.
    #[must_use]
    pub fn storage_ft(&self) -> u32 {
        self.fields.read().storage_ft
    }

    pub fn set_storage_ft(&self, storage_ft: u32) {
        self.fields.write().storage_ft = storage_ft;
        self.notify.attribute(&self.ident, "storage_ft");
    }

    #[must_use]
    pub fn max_wait_sec(&self) -> u32 {
        self.fields.read().max_wait_sec
    }

    pub fn set_max_wait_sec(&self, max_wait_sec: u32) {
        self.fields.write().max_wait_sec = max_wait_sec;
        self.notify.attribute(&self.ident, "max_wait_sec");
    }

    /// AM peak target release rate, vehicles per hour.
    #[must_use]
    pub fn am_target(&self) -> u32 {
        self.fields.read().am_target
    }

    pub fn set_am_target(&self, am_target: u32) {
        self.fields.write().am_target = am_target;
        self.notify.attribute(&self.ident, "am_target");
    }

    /// PM peak target release rate, vehicles per hour.
    #[must_use]
    pub fn pm_target(&self) -> u32 {
        self.fields.read().pm_target
    }

    pub fn set_pm_target(&self, pm_target: u32) {
        self.fields.write().pm_target = pm_target;
        self.notify.attribute(&self.ident, "pm_target");
    }

    /// Active release rate, present only while metering.
    #[must_use]
    pub fn rate(&self) -> Option<u32> {
        self.fields.read().rate
    }

    /// Algorithm-driven rate update; not writable by clients.
    pub fn set_rate_notify(&self, rate: Option<u32>) {
        {
            let mut fields = self.fields.write();
            if fields.rate == rate {
                return;
            }
            fields.rate = rate;
        }
        self.notify.attribute(&self.ident, "rate");
    }

    #[must_use]
    pub fn queue(&self) -> RampMeterQueue {
        self.fields.read().queue
    }

    /// Queue-detector-driven update; not writable by clients.
    pub fn set_queue_notify(&self, queue: RampMeterQueue) {
        {
            let mut fields = self.fields.write();
            if fields.queue == queue {
                return;
            }
            fields.queue = queue;
        }
        self.notify.attribute(&self.ident, "queue");
    }

    /// Whether the meter is currently releasing vehicles.
    #[must_use]
    pub fn is_metering(&self) -> bool {
        self.rate().is_some()
    }
}

entity_kind!(RampMeter, "ramp_meter");

impl ControllerIo for RampMeter {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        if self.is_metering() {
            styles |= ItemStyle::DEPLOYED;
        }

        styles
    }
}

/// Look up a ramp meter by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<RampMeter>> {
    adapter::lookup(handle, name)
}

/// First meter matching the checker.
pub fn find(
    handle: &NamespaceHandle,
    checker: impl FnMut(&RampMeter) -> bool,
) -> Option<Arc<RampMeter>> {
    adapter::find(handle, checker)
}

/// Iterate all ramp meters.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<RampMeter>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn metering_cycle_drives_styles() {
        let (ns, _handle) = fixture();
        let meter = ns.create("mtr_1", RampMeter::new).unwrap();
        meter.set_meter_type(Some(RampMeterType::DualAlternate));

        assert!(!meter.is_metering());
        meter.set_rate_notify(Some(900));
        assert!(meter.is_metering());
        assert!(meter.styles().contains(ItemStyle::DEPLOYED));

        meter.set_queue_notify(RampMeterQueue::Full);
        assert_eq!(meter.queue(), RampMeterQueue::Full);

        meter.set_rate_notify(None);
        assert!(!meter.styles().contains(ItemStyle::DEPLOYED));
    }

    #[test]
    fn find_metering_meters() {
        let (ns, handle) = fixture();
        ns.create("mtr_a", RampMeter::new).unwrap();
        let b = ns.create("mtr_b", RampMeter::new).unwrap();
        b.set_rate_notify(Some(1200));

        let found = find(&handle, RampMeter::is_metering).unwrap();
        assert_eq!(found.rate(), Some(1200));
    }
}
