use std::collections::HashSet;

use armory_core::id::Principal;
use serde::{Deserialize, Serialize};

/// Access list of privileged accounts. Membership gates nothing inside the
/// custody core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminSet {
    members: HashSet<Principal>,
}

impl AdminSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a principal to the access list. Idempotent.
    pub fn add(&mut self, admin: Principal) {
        self.members.insert(admin);
    }

    /// Remove a principal from the access list. Idempotent.
    pub fn remove(&mut self, admin: &Principal) {
        self.members.remove(admin);
    }

    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.members.contains(principal)
    }
}
