//! Module: io
//! Responsibility: the controller-attached I/O contract: binding an
//! entity to a `(controller, pin)` pair with conflict-free check-then-set.
//!
//! Invariants:
//! - At most one occupant per `(controller, pin)` pair; claims serialize
//!   through the owning controller's own lock.
//! - A refused claim leaves every prior binding intact.
//! - Lock order is always entity slot, then controller table; controller
//!   methods never take entity locks, so cross-entity moves cannot
//!   deadlock.

use crate::{
    error::{ConflictError, Error, IdentityError, RangeError},
    name::Name,
    object::{Entity, Ident},
    style::ItemStyle,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::{collections::BTreeMap, fmt, sync::Arc};
use tracing::warn;

/// Addressable I/O pins on a standard controller.
pub const ALL_PINS: u16 = 104;

///
/// IoRef
///
/// Identity of a pin occupant, recorded in the controller's pin table and
/// reported in conflict errors.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IoRef {
    pub tag: &'static str,
    pub name: Name,
}

impl IoRef {
    pub fn of(ident: &Ident) -> Result<Self, IdentityError> {
        Ok(Self {
            tag: ident.tag(),
            name: ident.name()?.clone(),
        })
    }
}

impl fmt::Display for IoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tag, self.name)
    }
}

///
/// IoPins
///
/// Capability of hosting addressable I/O pins. The lock inside the
/// implementation is the single serialization point for all conflict
/// checks against that controller.
///

pub trait IoPins: Entity {
    /// Highest addressable pin.
    fn max_pin(&self) -> u16;

    /// Claim `pin` for `io`. Fails if a different occupant holds it;
    /// claiming a pin already held by `io` itself succeeds.
    fn claim_pin(&self, pin: u16, io: &IoRef) -> Result<(), ConflictError>;

    /// Release `pin` if held by `io`; otherwise a no-op.
    fn release_pin(&self, pin: u16, io: &IoRef);

    /// Atomically move `io` from `old` to `new` on this controller.
    /// On conflict nothing changes.
    fn move_pin(&self, old: u16, new: u16, io: &IoRef) -> Result<(), ConflictError>;

    /// Current occupant of `pin`, if any.
    fn pin_occupant(&self, pin: u16) -> Option<IoRef>;

    /// Controller health feeding style computation.
    fn is_active(&self) -> bool;
    fn is_failed(&self) -> bool;
}

///
/// PinTable
///
/// Reference pin-table implementation embedded by controller entities.
/// One lock; every contract method is a single critical section.
///

#[derive(Default)]
pub struct PinTable {
    pins: Mutex<BTreeMap<u16, IoRef>>,
}

impl PinTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self, controller: &Ident, pin: u16, io: &IoRef) -> Result<(), ConflictError> {
        let mut pins = self.pins.lock();

        if let Some(occupant) = pins.get(&pin) {
            if occupant == io {
                return Ok(());
            }
            warn!(controller = %controller.key(), pin, %occupant, "pin claim refused");
            return Err(ConflictError::PinOccupied {
                controller: controller.key().clone(),
                pin,
                occupant: occupant.clone(),
            });
        }
        pins.insert(pin, io.clone());

        Ok(())
    }

    pub fn release(&self, pin: u16, io: &IoRef) {
        let mut pins = self.pins.lock();

        if pins.get(&pin) == Some(io) {
            pins.remove(&pin);
        }
    }

    pub fn shift(
        &self,
        controller: &Ident,
        old: u16,
        new: u16,
        io: &IoRef,
    ) -> Result<(), ConflictError> {
        let mut pins = self.pins.lock();

        if let Some(occupant) = pins.get(&new) {
            if occupant != io {
                return Err(ConflictError::PinOccupied {
                    controller: controller.key().clone(),
                    pin: new,
                    occupant: occupant.clone(),
                });
            }
        }
        if pins.get(&old) == Some(io) {
            pins.remove(&old);
        }
        pins.insert(new, io.clone());

        Ok(())
    }

    #[must_use]
    pub fn occupant(&self, pin: u16) -> Option<IoRef> {
        self.pins.lock().get(&pin).cloned()
    }

    /// Snapshot of all assignments, pin order.
    #[must_use]
    pub fn assignments(&self) -> Vec<(u16, IoRef)> {
        self.pins
            .lock()
            .iter()
            .map(|(pin, io)| (*pin, io.clone()))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.lock().is_empty()
    }
}

struct Binding {
    controller: Option<Arc<dyn IoPins>>,
    pin: u16,
}

///
/// IoSlot
///
/// Controller/pin binding cell embedded in every controller-attached
/// entity. Pin 0 means unassigned; valid pins are 1-based.
///

pub struct IoSlot {
    binding: Mutex<Binding>,
}

impl Default for IoSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl IoSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            binding: Mutex::new(Binding {
                controller: None,
                pin: 0,
            }),
        }
    }

    #[must_use]
    pub fn controller(&self) -> Option<Arc<dyn IoPins>> {
        self.binding.lock().controller.clone()
    }

    #[must_use]
    pub fn pin(&self) -> u16 {
        self.binding.lock().pin
    }

    /// Rebind to a controller (or unbind with `None`) at the current pin.
    /// Idempotent when the controller is unchanged. Returns whether the
    /// binding changed.
    pub fn set_controller(
        &self,
        io: &IoRef,
        controller: Option<Arc<dyn IoPins>>,
    ) -> Result<bool, Error> {
        let mut binding = self.binding.lock();

        let unchanged = match (&binding.controller, &controller) {
            // data-pointer identity; the same controller object either way
            (Some(cur), Some(new)) => std::ptr::addr_eq(Arc::as_ptr(cur), Arc::as_ptr(new)),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return Ok(false);
        }

        if let Some(new) = &controller {
            let pin = binding.pin;
            let max = new.max_pin();
            if pin < 1 || pin > max {
                return Err(RangeError::PinOutOfRange { pin, max }.into());
            }
            new.claim_pin(pin, io)?;
        }
        if let Some(old) = binding.controller.take() {
            old.release_pin(binding.pin, io);
        }
        binding.controller = controller;

        Ok(true)
    }

    /// Move to a new pin on the current controller (or stage the pin while
    /// unbound). Returns whether the binding changed.
    pub fn set_pin(&self, io: &IoRef, pin: u16) -> Result<bool, Error> {
        let mut binding = self.binding.lock();

        if pin == binding.pin {
            return Ok(false);
        }
        if pin < 1 {
            return Err(RangeError::PinOutOfRange { pin, max: ALL_PINS }.into());
        }
        if let Some(controller) = &binding.controller {
            let max = controller.max_pin();
            if pin > max {
                return Err(RangeError::PinOutOfRange { pin, max }.into());
            }
            controller.move_pin(binding.pin, pin, io)?;
        }
        binding.pin = pin;

        Ok(true)
    }

    /// Unbind controller and pin together; the only way to clear a
    /// conflicting pin. Returns whether anything was bound.
    pub fn clear(&self, io: &IoRef) -> bool {
        let mut binding = self.binding.lock();

        let was_bound = binding.controller.is_some() || binding.pin != 0;
        if let Some(controller) = binding.controller.take() {
            controller.release_pin(binding.pin, io);
        }
        binding.pin = 0;

        was_bound
    }

    /// Base classification from the binding alone; entities OR in their
    /// own domain bits.
    #[must_use]
    pub fn base_styles(&self) -> ItemStyle {
        match self.controller() {
            None => ItemStyle::NO_CONTROLLER | ItemStyle::INACTIVE,
            Some(controller) => {
                let mut styles = if controller.is_active() {
                    ItemStyle::ACTIVE
                } else {
                    ItemStyle::INACTIVE
                };
                if controller.is_failed() {
                    styles |= ItemStyle::FAILED;
                } else if controller.is_active() {
                    styles |= ItemStyle::AVAILABLE;
                }

                styles
            }
        }
    }
}

///
/// ControllerIo
///
/// Refinement of the named-object contract for entities bound to a
/// controller pin. Mutations report synchronously; a refused conflict
/// check leaves the prior association intact.
///

pub trait ControllerIo: Entity {
    fn io(&self) -> &IoSlot;

    /// Notification handle used by the provided mutators.
    fn notify_handle(&self) -> &crate::notify::Notify;

    fn controller(&self) -> Option<Arc<dyn IoPins>> {
        self.io().controller()
    }

    fn pin(&self) -> u16 {
        self.io().pin()
    }

    fn set_controller(&self, controller: Option<Arc<dyn IoPins>>) -> Result<(), Error> {
        let io = IoRef::of(self.ident())?;
        if self.io().set_controller(&io, controller)? {
            self.notify_handle().attribute(self.ident(), "controller");
        }

        Ok(())
    }

    fn set_pin(&self, pin: u16) -> Result<(), Error> {
        let io = IoRef::of(self.ident())?;
        if self.io().set_pin(&io, pin)? {
            self.notify_handle().attribute(self.ident(), "pin");
        }

        Ok(())
    }

    /// Unbind controller and pin together.
    fn clear_io(&self) -> Result<(), Error> {
        let io = IoRef::of(self.ident())?;
        if self.io().clear(&io) {
            self.notify_handle().attribute(self.ident(), "controller");
            self.notify_handle().attribute(self.ident(), "pin");
        }

        Ok(())
    }

    /// Classification bits. Recomputed from live state on every call;
    /// implementations must not cache the result.
    fn styles(&self) -> ItemStyle {
        self.io().base_styles()
    }
}
