use std::collections::{HashMap, HashSet};

use armory_core::id::Principal;
use serde::{Deserialize, Serialize};

/// Directed delegation edges: owner -> set of delegates allowed to act on
/// the owner's assets.
///
/// Delegation is neither symmetric nor transitive, and a principal is
/// always authorized for itself regardless of the edge map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DelegationLedger {
    edges: HashMap<Principal, HashSet<Principal>>,
}

impl DelegationLedger {
    /// Create a new, empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `delegate` the right to act on `owner`'s assets. Idempotent.
    pub fn authorize(&mut self, owner: Principal, delegate: Principal) {
        self.edges.entry(owner).or_default().insert(delegate);
    }

    /// Revoke a delegation edge. Idempotent; revoking an absent edge is a
    /// no-op.
    pub fn unauthorize(&mut self, owner: &Principal, delegate: &Principal) {
        if let Some(delegates) = self.edges.get_mut(owner) {
            delegates.remove(delegate);
            if delegates.is_empty() {
                self.edges.remove(owner);
            }
        }
    }

    /// Check whether `actor` may act on `owner`'s assets: true for the
    /// owner itself, or when a delegation edge exists.
    pub fn is_authorized(&self, owner: &Principal, actor: &Principal) -> bool {
        actor == owner
            || self
                .edges
                .get(owner)
                .map_or(false, |delegates| delegates.contains(actor))
    }
}
