//! `identikit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod identity;

pub use error::{DomainError, DomainResult};
pub use identity::Identifiable;
