//! Ordinal enumerations for the traffic domain.
//!
//! Every enumeration here is persisted externally by its integer ordinal
//! (a lookup-table key), so declaration order is a durable contract:
//! append-only, never reorder, never remove. Each type documents its
//! out-of-range decode policy (a designated safe default, or an explicit
//! `None`), and that choice is part of the persistence contract.

mod alert;
mod comm;
mod gate;
mod lane;
mod meter;
mod sign;

pub use alert::*;
pub use comm::*;
pub use gate::*;
pub use lane::*;
pub use meter::*;
pub use sign::*;
