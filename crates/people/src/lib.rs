//! People domain module.
//!
//! This crate contains the person entity, identified by its national ID,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod person;

pub use person::{NationalId, Person};
