use std::collections::HashMap;

use armory_core::asset::Asset;
use armory_core::id::{AssetId, Principal};
use serde::{Deserialize, Serialize};

/// The registry's ownership store: two views over the same asset set.
///
/// `by_owner` holds each principal's current holdings in insertion order;
/// `by_id` is the global id lookup. Both views are mutated together, so an
/// asset appears in an owner's list iff `by_id` maps its id to a record
/// with that owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustodyIndex {
    // Mapping from principal to the ids it currently holds, in insertion order
    by_owner: HashMap<Principal, Vec<AssetId>>,

    // Mapping from asset id to the unique asset record
    by_id: HashMap<AssetId, Asset>,
}

impl CustodyIndex {
    /// Create a new, empty custody index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an asset entering custody.
    ///
    /// A live id is replaced in place: the previous record is dropped and
    /// the id is never duplicated inside an owner's list.
    pub fn insert(&mut self, asset: Asset) {
        let id = asset.id;
        let owner = asset.owner;

        if let Some(previous) = self.by_id.insert(id, asset) {
            if previous.owner != owner {
                self.remove_holding(&previous.owner, &id);
            }
        }

        let holdings = self.by_owner.entry(owner).or_default();
        if !holdings.contains(&id) {
            holdings.push(id);
        }
    }

    /// Remove an asset from custody, returning its record.
    ///
    /// The remaining holdings of the owner keep their insertion order.
    pub fn remove(&mut self, id: &AssetId) -> Option<Asset> {
        let asset = self.by_id.remove(id)?;
        self.remove_holding(&asset.owner, id);
        Some(asset)
    }

    fn remove_holding(&mut self, owner: &Principal, id: &AssetId) {
        if let Some(holdings) = self.by_owner.get_mut(owner) {
            holdings.retain(|held| held != id);
            if holdings.is_empty() {
                self.by_owner.remove(owner);
            }
        }
    }

    /// Look up an asset by id
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.by_id.get(id)
    }

    /// Check whether an id is currently custodied
    pub fn contains(&self, id: &AssetId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Snapshot of an owner's current holdings, in insertion order.
    ///
    /// Unknown owners yield an empty vec rather than an error.
    pub fn assets_of(&self, owner: &Principal) -> Vec<Asset> {
        self.by_owner
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.by_id.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of assets currently in custody
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::id::{ClassId, TokenId};

    fn asset(owner_byte: u8, token: u64) -> Asset {
        let owner = Principal::new([owner_byte; 32]);
        let class = ClassId::new([0xC0; 32]);
        let token = TokenId::new(token);
        let id = AssetId::derive(&owner, &class, token);
        Asset::new(id, class, token, owner)
    }

    #[test]
    fn test_insert_and_get() {
        let mut index = CustodyIndex::new();
        let asset = asset(1, 1);

        index.insert(asset.clone());

        assert_eq!(index.get(&asset.id), Some(&asset));
        assert!(index.contains(&asset.id));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_views_stay_consistent() {
        let mut index = CustodyIndex::new();
        let owner = Principal::new([1; 32]);
        let a = asset(1, 1);
        let b = asset(1, 2);

        index.insert(a.clone());
        index.insert(b.clone());
        assert_eq!(index.assets_of(&owner), vec![a.clone(), b.clone()]);

        index.remove(&a.id);
        assert_eq!(index.assets_of(&owner), vec![b.clone()]);
        assert!(!index.contains(&a.id));
        assert!(index.contains(&b.id));
    }

    #[test]
    fn test_ordered_removal_preserves_insertion_order() {
        let mut index = CustodyIndex::new();
        let owner = Principal::new([1; 32]);
        let a = asset(1, 1);
        let b = asset(1, 2);
        let c = asset(1, 3);

        index.insert(a.clone());
        index.insert(b.clone());
        index.insert(c.clone());

        index.remove(&b.id);

        let holdings = index.assets_of(&owner);
        assert_eq!(holdings, vec![a, c]);
    }

    #[test]
    fn test_reinsert_does_not_duplicate() {
        let mut index = CustodyIndex::new();
        let owner = Principal::new([1; 32]);
        let a = asset(1, 1);

        index.insert(a.clone());
        index.insert(a.clone());

        assert_eq!(index.len(), 1);
        assert_eq!(index.assets_of(&owner).len(), 1);
    }

    #[test]
    fn test_remove_returns_record_and_prunes_owner() {
        let mut index = CustodyIndex::new();
        let owner = Principal::new([1; 32]);
        let a = asset(1, 1);

        index.insert(a.clone());
        let removed = index.remove(&a.id);

        assert_eq!(removed, Some(a));
        assert!(index.assets_of(&owner).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_unknown_owner_is_empty() {
        let index = CustodyIndex::new();
        assert!(index.assets_of(&Principal::new([9; 32])).is_empty());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut index = CustodyIndex::new();
        assert_eq!(index.remove(&AssetId::new([5; 32])), None);
    }

    #[test]
    fn test_index_bincode_round_trip() {
        let mut index = CustodyIndex::new();
        let owner = Principal::new([1; 32]);
        index.insert(asset(1, 1));
        index.insert(asset(1, 2));

        let bytes = bincode::serialize(&index).unwrap();
        let decoded: CustodyIndex = bincode::deserialize(&bytes).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.assets_of(&owner), index.assets_of(&owner));
    }
}
