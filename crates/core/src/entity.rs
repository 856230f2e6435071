//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Orders and products are entities: two records with the same id describe
/// the same business object, even if a later snapshot carries other values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
