//! Identifier prefix resolution.
//!
//! The **naming prefix** of an entity id `domain.object_id` is the leading
//! segment of `object_id` up to and including its first underscore:
//! `light.lr_lt_ceiling` resolves to `lr_`. Areas use it as a naming
//! convention signal.

use crate::id::EntityId;

/// Resolve the naming prefix of `entity_id`.
///
/// `object_id` is everything after the first `.`. Returns `None` when there
/// is no `.`, when `object_id` is empty, or when it contains no underscore.
#[must_use]
pub fn resolve_prefix(entity_id: &str) -> Option<&str> {
    let (_, object_id) = entity_id.split_once('.')?;
    let underscore = object_id.find('_')?;
    Some(&object_id[..=underscore])
}

impl EntityId {
    /// Naming prefix of this id, see [`resolve_prefix`].
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        resolve_prefix(self.as_str())
    }
}
