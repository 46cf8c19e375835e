use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::PropertyId;

/// Listings the user has saved during this session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<PropertyId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `id`'s membership flipped.
    pub fn toggle(&self, id: &PropertyId) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.clone());
        }
        Self(next)
    }

    pub fn contains(&self, id: &PropertyId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyId> {
        self.0.iter()
    }
}

impl FromIterator<PropertyId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = PropertyId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let empty = FavoriteSet::new();
        let id = PropertyId::from(3);

        let saved = empty.toggle(&id);
        assert!(saved.contains(&id));
        assert_eq!(saved.len(), 1);
        assert!(empty.is_empty());

        assert_eq!(saved.toggle(&id), empty);
    }

    #[test]
    fn double_toggle_is_identity() {
        let set: FavoriteSet = [1u64, 4, 6].into_iter().map(PropertyId::from).collect();

        for id in [1u64, 2, 6, 99].map(PropertyId::from) {
            assert_eq!(set.toggle(&id).toggle(&id), set);
        }
    }

    #[test]
    fn toggle_accepts_unknown_ids() {
        let set = FavoriteSet::new().toggle(&PropertyId::from("missing"));
        assert_eq!(set.iter().count(), 1);
    }
}
