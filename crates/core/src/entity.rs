//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records coming back from the host platform may be partial projections, so
/// the identifier is optional until the record has been persisted.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if the record carries one.
    fn id(&self) -> Option<&Self::Id>;

    /// Whether the record has been persisted (has an identifier).
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
