//! Vehicles domain module.
//!
//! This crate contains the vehicle entity, identified by its license plate,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod vehicle;

pub use vehicle::{Plate, Vehicle};
