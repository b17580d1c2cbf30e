//! Module: camera_preset
//! Responsibility: the camera preset entity and its typed helpers.

use crate::enums::Direction;
use parking_lot::RwLock;
use std::sync::Arc;
use wayside_core::{
    adapter, entity_kind,
    error::{Error, RangeError},
    memory::MemoryNamespace,
    name::Name,
    namespace::NamespaceHandle,
    notify::Notify,
    object::Ident,
};

/// Highest preset number a camera supports.
pub const MAX_PRESET_NUM: u8 = 12;

///
/// CameraPreset
///
/// Saved pan/tilt/zoom position on a camera, optionally associated with
/// a direction of travel for automatic recall.
///

#[derive(Debug)]
pub struct CameraPreset {
    ident: Ident,
    notify: Notify,
    camera: Name,
    fields: RwLock<Fields>,
}

#[derive(Debug)]
struct Fields {
    preset_num: u8,
    direction: Direction,
}

impl CameraPreset {
    #[must_use]
    pub fn new(ident: Ident, notify: Notify, camera: Name, preset_num: u8) -> Self {
        Self {
            ident,
            notify,
            camera,
            fields: RwLock::new(Fields {
                preset_num,
                direction: Direction::Unknown,
            }),
        }
    }

    /// Name of the owning camera.
    #[must_use]
    pub const fn camera(&self) -> &Name {
        &self.camera
    }

    /// Resolve the owning camera through the namespace.
    #[must_use]
    pub fn camera_entity(&self, handle: &NamespaceHandle) -> Option<Arc<crate::camera::Camera>> {
        crate::camera::lookup(handle, self.camera.as_str())
    }

    #[must_use]
    pub fn preset_num(&self) -> u8 {
        self.fields.read().preset_num
    }

    pub fn set_preset_num(&self, preset_num: u8) -> Result<(), Error> {
        check_preset_num(preset_num)?;
        self.fields.write().preset_num = preset_num;
        self.notify.attribute(&self.ident, "preset_num");

        Ok(())
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.fields.read().direction
    }

    pub fn set_direction(&self, direction: Direction) {
        self.fields.write().direction = direction;
        self.notify.attribute(&self.ident, "direction");
    }
}

entity_kind!(CameraPreset, "camera_preset");

fn check_preset_num(preset_num: u8) -> Result<(), Error> {
    if preset_num < 1 || preset_num > MAX_PRESET_NUM {
        return Err(RangeError::PresetOutOfRange {
            num: preset_num,
            max: MAX_PRESET_NUM,
        }
        .into());
    }

    Ok(())
}

/// Create a preset, validating the preset number first.
pub fn create(
    ns: &MemoryNamespace,
    name: &str,
    camera: Name,
    preset_num: u8,
) -> Result<Arc<CameraPreset>, Error> {
    check_preset_num(preset_num)?;
    ns.create(name, |ident, notify| {
        CameraPreset::new(ident, notify, camera, preset_num)
    })
}

/// Look up a preset by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<CameraPreset>> {
    adapter::lookup(handle, name)
}

/// Preset `preset_num` of the named camera.
#[must_use]
pub fn find(handle: &NamespaceHandle, camera: &Name, preset_num: u8) -> Option<Arc<CameraPreset>> {
    adapter::find(handle, |p: &CameraPreset| {
        p.camera() == camera && p.preset_num() == preset_num
    })
}

/// Preset recalled for a direction of travel on the named camera.
#[must_use]
pub fn find_direction(
    handle: &NamespaceHandle,
    camera: &Name,
    direction: Direction,
) -> Option<Arc<CameraPreset>> {
    adapter::find(handle, |p: &CameraPreset| {
        p.camera() == camera && p.direction() == direction
    })
}
