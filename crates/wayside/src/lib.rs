//! Wayside: typed object registry and device model for roadside traffic
//! equipment.
//!
//! ## Crate layout
//! - `enums`: ordinal enumerations whose integer position is a durable
//!   persistence contract.
//! - one module per entity type, each pairing the entity struct with its
//!   typed helper functions (`lookup` / `find` / `iter`).
//! - `wayside-core` (re-exported as [`core`]) carries the shared
//!   contracts: named objects, controller-attached I/O, the namespace,
//!   and the adapter layer.
//!
//! Helpers are stateless free functions over an injected
//! [`NamespaceHandle`](wayside_core::namespace::NamespaceHandle); they
//! never cache and are safe to call before a client session is
//! established.

pub use wayside_core as core;

pub mod enums;

pub mod action_plan;
pub mod alarm;
pub mod camera;
pub mod camera_preset;
pub mod catalog;
pub mod comm_link;
pub mod controller;
pub mod detector;
pub mod dms;
pub mod dms_sign_group;
pub mod gate_arm;
pub mod lcs_indication;
pub mod modem;
pub mod play_list;
pub mod ramp_meter;
pub mod sign_group;
pub mod system_attribute;

#[cfg(test)]
pub(crate) mod test_fixtures;

/// Workspace version re-export for downstream tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Entity types and domain vocabulary; helper modules are imported
/// explicitly where used.
///

pub mod prelude {
    pub use crate::{
        action_plan::ActionPlan,
        alarm::Alarm,
        camera::Camera,
        camera_preset::CameraPreset,
        catalog::Catalog,
        comm_link::CommLink,
        controller::Controller,
        detector::Detector,
        dms::Dms,
        dms_sign_group::DmsSignGroup,
        enums::*,
        gate_arm::GateArm,
        lcs_indication::LcsIndication,
        modem::Modem,
        play_list::PlayList,
        ramp_meter::RampMeter,
        sign_group::SignGroup,
        system_attribute::SystemAttribute,
    };
    pub use wayside_core::prelude::*;
}
