//! Core runtime for Wayside: the named-object and controller-attached I/O
//! contracts, the object namespace and its in-process implementation, the
//! typed adapter layer, and the ordinal-enumeration mechanism shared by
//! every entity type.
//!
//! Domain entity types and their helper modules live in the `wayside`
//! facade crate; this crate carries only the mechanisms they share.

pub mod adapter;
pub mod error;
pub mod io;
pub mod memory;
pub mod name;
pub mod namespace;
pub mod notify;
pub mod object;
pub mod ordinal;
pub mod style;

///
/// Prelude
///
/// Domain vocabulary only; helpers and the in-memory store are imported
/// explicitly where used.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        io::{ControllerIo, IoPins, IoRef, IoSlot},
        name::Name,
        namespace::{Namespace, NamespaceHandle},
        notify::Notify,
        object::{Entity, EntityKind, Ident, Tagged},
        ordinal::Ordinal,
        style::ItemStyle,
    };
}
