//! Module: system_attribute
//! Responsibility: tunable policy values stored as namespace entities,
//! plus typed accessors with compiled-in defaults.
//!
//! An attribute that is absent, or whose value fails to parse, resolves
//! to the caller-supplied default; misconfiguration must never take down
//! a reader.

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
/// SystemAttribute
///
/// One named policy value. The attribute name is the entity name; the
/// value is an uninterpreted string parsed at the read site.
///

pub struct SystemAttribute {
    ident: Ident,
    notify: Notify,
    value: RwLock<String>,
}

impl SystemAttribute {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify) -> Self {
        Self {
            ident,
            notify,
            value: RwLock::new(String::new()),
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.value.read().clone()
    }

    pub fn set_value(&self, value: &str) {
        *self.value.write() = value.to_string();
        self.notify.attribute(&self.ident, "value");
    }
}

entity_kind!(SystemAttribute, "system_attribute");

/// Look up an attribute entity by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<SystemAttribute>> {
    adapter::lookup(handle, name)
}

/// Raw attribute value, if configured.
#[must_use]
pub fn get(handle: &NamespaceHandle, name: &str) -> Option<String> {
    lookup(handle, name).map(|attr| attr.value())
}

/// String attribute with a default.
#[must_use]
pub fn get_or(handle: &NamespaceHandle, name: &str, default: &str) -> String {
    get(handle, name).unwrap_or_else(|| default.to_string())
}

/// Integer attribute with a default.
#[must_use]
pub fn get_int(handle: &NamespaceHandle, name: &str, default: i64) -> i64 {
    parse_or(handle, name, default)
}

/// Boolean attribute with a default.
#[must_use]
pub fn get_bool(handle: &NamespaceHandle, name: &str, default: bool) -> bool {
    parse_or(handle, name, default)
}

fn parse_or<T>(handle: &NamespaceHandle, name: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match get(handle, name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(attribute = name, value = %value, "unparseable system attribute");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn absent_attribute_resolves_to_default() {
        let (_ns, handle) = fixture();
        assert_eq!(get_int(&handle, "dms_page_on_secs", 2), 2);
        assert!(get_bool(&handle, "camera_autoplay", true));
    }

    #[test]
    fn configured_attribute_overrides_default() {
        let (ns, handle) = fixture();
        let attr = ns.create("dms_page_on_secs", SystemAttribute::new).unwrap();
        attr.set_value("4");

        assert_eq!(get_int(&handle, "dms_page_on_secs", 2), 4);
    }

    #[test]
    fn unparseable_value_falls_back() {
        let (ns, handle) = fixture();
        let attr = ns.create("meter_green_secs", SystemAttribute::new).unwrap();
        attr.set_value("fast");

        assert_eq!(get_int(&handle, "meter_green_secs", 1), 1);
    }

    #[test]
    fn detached_handle_uses_defaults() {
        let handle = NamespaceHandle::detached();
        assert_eq!(get_or(&handle, "district", "tms"), "tms");
    }
}
