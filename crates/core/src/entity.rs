//! Entity trait: identity + continuity across state changes.

/// Entity capability: anything that exposes a stable identifier.
///
/// Stores and loggers in this workspace are generic over `T: Entity`, so any
/// record type can be kept and persisted as long as it can name its own id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

