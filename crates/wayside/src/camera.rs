//! Module: camera
//! Responsibility: the camera entity and its typed helpers.

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
/// Camera
///
/// CCTV camera. The video path (encoder URI and channel) belongs to the
/// streaming collaborator; `publish` gates public visibility.
///

pub struct Camera {
    ident: Ident,
    notify: Notify,
    io: IoSlot,
    fields: RwLock<Fields>,
}

#[derive(Default)]
struct Fields {
    encoder: String,
    encoder_channel: u16,
    publish: bool,
    video_loss: bool,
}

impl Camera {
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
    pub fn encoder(&self) -> String {
        self.fields.read().encoder.clone()
    }

    pub fn set_encoder(&self, encoder: &str) {
        self.fields.write().encoder = encoder.to_string();
        self.notify.attribute(&self.ident, "encoder");
    }

    #[must_use]
    pub fn encoder_channel(&self) -> u16 {
        self.fields.read().encoder_channel
    }

    pub fn set_encoder_channel(&self, channel: u16) {
        self.fields.write().encoder_channel = channel;
        self.notify.attribute(&self.ident, "encoder_channel");
    }

    #[must_use]
    pub fn publish(&self) -> bool {
        self.fields.read().publish
    }

    pub fn set_publish(&self, publish: bool) {
        self.fields.write().publish = publish;
        self.notify.attribute(&self.ident, "publish");
    }

    #[must_use]
    pub fn video_loss(&self) -> bool {
        self.fields.read().video_loss
    }

    /// Streaming-collaborator signal; not writable by clients.
    pub fn set_video_loss_notify(&self, video_loss: bool) {
        {
            let mut fields = self.fields.write();
            if fields.video_loss == video_loss {
                return;
            }
            fields.video_loss = video_loss;
        }
        self.notify.attribute(&self.ident, "video_loss");
    }
}

entity_kind!(Camera, "camera");

impl ControllerIo for Camera {
    fn io(&self) -> &IoSlot {
        &self.io
    }

    fn notify_handle(&self) -> &Notify {
        &self.notify
    }

    fn styles(&self) -> ItemStyle {
        let mut styles = self.io.base_styles();
        if !self.publish() {
            styles |= ItemStyle::INACTIVE;
        }
        if self.video_loss() {
            styles.remove(ItemStyle::AVAILABLE);
            styles |= ItemStyle::FAILED;
        }

        styles
    }
}

/// Look up a camera by name.
#[must_use]
pub fn lookup(handle: &NamespaceHandle, name: &str) -> Option<Arc<Camera>> {
    adapter::lookup(handle, name)
}

/// First camera matching the checker.
pub fn find(handle: &NamespaceHandle, checker: impl FnMut(&Camera) -> bool) -> Option<Arc<Camera>> {
    adapter::find(handle, checker)
}

/// Iterate all cameras.
pub fn iter(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Camera>> + use<> {
    adapter::iter(handle)
}

/// Iterate cameras visible to the public.
pub fn iter_published(handle: &NamespaceHandle) -> impl Iterator<Item = Arc<Camera>> + use<> {
    iter(handle).filter(|c| c.publish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture;

    #[test]
    fn published_cameras_are_filtered() {
        let (ns, handle) = fixture();
        let a = ns.create("cam_a", Camera::new).unwrap();
        ns.create("cam_b", Camera::new).unwrap();
        a.set_publish(true);

        let published: Vec<_> = iter_published(&handle).collect();
        assert_eq!(published.len(), 1);
    }

    #[test]
    fn video_loss_fails_the_camera() {
        let (ns, _handle) = fixture();
        let cam = ns.create("cam_a", Camera::new).unwrap();

        cam.set_video_loss_notify(true);
        assert!(cam.styles().contains(ItemStyle::FAILED));
        cam.set_video_loss_notify(false);
        assert!(!cam.styles().contains(ItemStyle::FAILED));
    }
}
