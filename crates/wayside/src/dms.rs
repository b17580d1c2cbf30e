//! Module: dms
//! Responsibility: the dynamic message sign entity and its typed helpers.

use crate::enums::SignMsgPriority;
use chrono::{DateTime, Utc};
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
/// Dms
///
/// Dynamic message sign. Message rendering and the sign protocol belong
/// to downstream collaborators; the registry carries the operator and
/// scheduled messages plus the priority that arbitrates between them.
///

pub struct Dms {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    msg_user: Option<String>,
    msg_sched: Option<String>,
    msg_priority: Option<SignMsgPriority>,
    deploy_time: Option<DateTime<Utc>>,
}

impl Dms {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            io: IoSlot::new(),
            fields: RwLock::new(Fields::default()),
        }
    }

    /// Operator-deployed message, if any.
    #[must_use]
    pub fn msg_user(&self) -> Option<String> {
        self.fields.read().msg_user.clone()
    }

    /// Deploy or blank the operator message. A deploy stamps the deploy
    /// time; blanking clears the priority as well.
    pub fn set_msg_user(&self, msg: Option<&str>, priority: SignMsgPriority) {
        {
            let mut fields = self.fields.write();
            fields.msg_user = msg.map(str::to_string);
            if msg.is_some() {
                fields.msg_priority = Some(priority);
                fields.deploy_time = Some(Utc::now());
            } else {
                fields.msg_priority = None;
            }
        }
        self.notify.attribute(&self.ident, "msg_user");
        self.notify.attribute(&self.ident, "msg_priority");
    }

    /// Message requested by the scheduler, if any.
    #[must_use]
    pub fn msg_sched(&self) -> Option<String> {
        self.fields.read().msg_sched.clone()
    }

    pub fn set_msg_sched_notify(&self, msg: Option<&str>) {
        {
            let mut fields = self.fields.write();
            if fields.msg_sched.as_deref() == msg {
                return;
            }
            fields.msg_sched = msg.map(str::to_string);
        }
        self.notify.attribute(&self.ident, "msg_sched");
    }

    #[must_use]
    pub fn msg_priority(&self) -> Option<SignMsgPriority> {
        self.fields.read().msg_priority
    }

    #[must_use]
    pub fn deploy_time(&self) -> Option<DateTime<Utc>> {
        self.fields.read().deploy_time
    }

    /// Whether a new message at `priority` may take the sign.
    #[must_use]
    pub fn accepts(&self, priority: SignMsgPriority) -> bool {
        match self.msg_priority() {
            Some(current) => priority.supersedes(current),
            None => true,
        }
    }
}

entity_kind!(Dms, "dms");

impl ControllerIo for Dms {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        if self.msg_user().is_some() {
            styles |= ItemStyle::DEPLOYED;
        }
        if self.msg_sched().is_some() {
            styles |= ItemStyle::SCHEDULED;
        }

        styles
    }
}

/// Look up a sign by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Dms>> {
    adapter::lookup(handle, name)
}

/// First sign matching the checker.
pub fn find(handle: &NamespaceHandle, checker: impl FnMut(&Dms) -> bool) -> Option<Arc<Dms>> {
    adapter::find(handle, checker)
}

/// Iterate all signs.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Dms>> + use<> {
    adapter::iter(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn deploy_and_blank_cycle() {
        let (ns, _handle) = fixture();
        let dms = ns.create("dms_1", Dms::new).unwrap();

        assert!(dms.accepts(SignMsgPriority::Psa));
        dms.set_msg_user(Some("CRASH AHEAD"), SignMsgPriority::IncidentHigh);
        assert_eq!(dms.msg_priority(), Some(SignMsgPriority::IncidentHigh));
        assert!(dms.deploy_time().is_some());

        // lower priority must not take the sign
        assert!(!dms.accepts(SignMsgPriority::TravelTime));
        assert!(dms.accepts(SignMsgPriority::Override));

        dms.set_msg_user(None, SignMsgPriority::Blank);
        assert_eq!(dms.msg_user(), None);
        assert_eq!(dms.msg_priority(), None);
    }

    #[test]
    fn styles_follow_messages() {
        let (ns, _handle) = fixture();
        let dms = ns.create("dms_1", Dms::new).unwrap();

        assert!(!dms.styles().contains(ItemStyle::DEPLOYED));
        dms.set_msg_user(Some("TEST"), SignMsgPriority::Operator);
        dms.set_msg_sched_notify(Some("EXIT CLOSED"));
        let styles = dms.styles();
        assert!(styles.contains(ItemStyle::DEPLOYED | ItemStyle::SCHEDULED));
    }
}
