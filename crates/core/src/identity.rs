//! Identity capability: a readable, reassignable identifier.

/// Capability implemented by any type that carries a designated identifier.
///
/// Each implementer binds its own identifier type; there is no shared
/// hierarchy between implementers. Code that only needs "something with an
/// id" takes `T: Identifiable` and stays ignorant of the concrete id type.
pub trait Identifiable {
    /// Strongly-typed identifier.
    ///
    /// `Display` is part of the contract so generic callers can render the
    /// identifier without knowing its concrete type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the current identifier.
    fn id(&self) -> &Self::Id;

    /// Replaces the identifier unconditionally.
    ///
    /// No validation; the only side effect is the mutation of the
    /// identifier field itself.
    fn set_id(&mut self, id: Self::Id);
}
