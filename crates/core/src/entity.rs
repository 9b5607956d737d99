//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index a batch of entities by identifier.
///
/// Later duplicates replace earlier ones, so the map holds at most one entry
/// per distinct id.
pub fn index_by_id<E>(entities: &[E]) -> std::collections::HashMap<E::Id, &E>
where
    E: Entity,
{
    entities.iter().map(|e| (e.id().clone(), e)).collect()
}
