use crate::{io::IoRef, name::Name};
use std::fmt;
use thiserror::Error as ThisError;

///
/// NameError
///
/// Identity string validation failures, raised at the creation boundary
/// only. A `Name` that exists is always valid.
///

#[derive(Debug, ThisError)]
pub enum NameError {
    #[error("object name is empty")]
    Empty,

    #[error("object name length {len} exceeds max {max}")]
    TooLong { len: usize, max: usize },

    #[error("object name must be ASCII")]
    NonAscii,
}

///
/// IdentityError
///
/// Operating on an object that is no longer (or not yet) reachable
/// through the namespace.
///

#[derive(Debug, ThisError)]
pub enum IdentityError {
    #[error("object '{tag}/{name}' has been destroyed")]
    Detached { tag: String, name: String },

    #[error("namespace is not available")]
    NamespaceUnavailable,
}

///
/// ConflictError
///
/// A mutation refused because it would collide with live state. The
/// prior state is always left intact.
///

#[derive(Debug, ThisError)]
pub enum ConflictError {
    #[error("name '{name}' already in use for type '{tag}'")]
    NameInUse { tag: &'static str, name: Name },

    #[error("pin {pin} on controller '{controller}' already assigned to {occupant}")]
    PinOccupied {
        controller: Name,
        pin: u16,
        occupant: IoRef,
    },

    #[error("'{tag}/{name}' is still assigned to a controller")]
    Bound { tag: &'static str, name: Name },
}

///
/// RangeError
///

#[derive(Debug, ThisError)]
pub enum RangeError {
    #[error("invalid pin: {pin} (max {max})")]
    PinOutOfRange { pin: u16, max: u16 },

    #[error("invalid preset number: {num} (max {max})")]
    PresetOutOfRange { num: u8, max: u8 },
}

///
/// Error
///
/// Central error surface. Absence from lookup or find is a normal `None`
/// result and never appears here.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Name(_) => ErrorClass::Name,
            Self::Identity(_) => ErrorClass::Identity,
            Self::Conflict(_) => ErrorClass::Conflict,
            Self::Range(_) => ErrorClass::Range,
        }
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

///
/// ErrorClass
///
/// Coarse classification used by transport collaborators when mapping
/// failures onto wire status codes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Name,
    Identity,
    Conflict,
    Range,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Identity => "identity",
            Self::Conflict => "conflict",
            Self::Range => "range",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matches_variant() {
        let err = Error::from(NameError::Empty);
        assert_eq!(err.class(), ErrorClass::Name);

        let err = Error::from(RangeError::PinOutOfRange { pin: 0, max: 104 });
        assert_eq!(err.class(), ErrorClass::Range);
        assert!(!err.is_conflict());
    }

    #[test]
    fn display_includes_pin_and_max() {
        let err = RangeError::PinOutOfRange { pin: 105, max: 104 };
        assert_eq!(err.to_string(), "invalid pin: 105 (max 104)");
    }
}
