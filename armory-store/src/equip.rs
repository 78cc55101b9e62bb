use std::collections::HashMap;

use armory_core::error::RegistryError;
use armory_core::id::AssetId;
use serde::{Deserialize, Serialize};

/// The attachment relation over asset ids.
///
/// `children` holds each parent's equip list; `parent_of` maps every
/// attached child to its single parent, which is what makes multi-parent
/// attachment unrepresentable. A child is attached iff it has an entry in
/// `parent_of`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipGraph {
    // Mapping from parent id to the child ids currently equipped into it
    children: HashMap<AssetId, Vec<AssetId>>,

    // Mapping from attached child to its parent
    parent_of: HashMap<AssetId, AssetId>,
}

impl EquipGraph {
    /// Create a new, empty equip graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a child is currently attached to any parent
    pub fn is_attached(&self, child: &AssetId) -> bool {
        self.parent_of.contains_key(child)
    }

    /// The parent a child is currently attached to, if any
    pub fn parent_of(&self, child: &AssetId) -> Option<AssetId> {
        self.parent_of.get(child).copied()
    }

    /// The ids currently equipped into a parent.
    ///
    /// Unknown parents yield an empty slice rather than an error.
    pub fn children_of(&self, parent: &AssetId) -> &[AssetId] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attach a child to a parent.
    ///
    /// Fails with `AlreadyAttached` if the child is attached anywhere; a
    /// child must be detached before it can be re-equipped.
    pub fn attach(&mut self, child: AssetId, parent: AssetId) -> Result<(), RegistryError> {
        if self.parent_of.contains_key(&child) {
            return Err(RegistryError::AlreadyAttached(child));
        }

        self.children.entry(parent).or_default().push(child);
        self.parent_of.insert(child, parent);
        Ok(())
    }

    /// Detach a child from the specified parent.
    ///
    /// Fails with `NotAttached` for a free child, and with
    /// `NotAttachedToParent` when the child is attached to a different
    /// parent than the one named.
    pub fn detach(&mut self, child: AssetId, parent: AssetId) -> Result<(), RegistryError> {
        let current = match self.parent_of.get(&child) {
            Some(current) => *current,
            None => return Err(RegistryError::NotAttached(child)),
        };
        if current != parent {
            return Err(RegistryError::NotAttachedToParent { child, parent });
        }

        if let Some(list) = self.children.get_mut(&parent) {
            // Order inside an equip list is not significant
            if let Some(position) = list.iter().position(|held| *held == child) {
                list.swap_remove(position);
            }
            if list.is_empty() {
                self.children.remove(&parent);
            }
        }
        self.parent_of.remove(&child);
        Ok(())
    }
}
