use log::{debug, warn};

use armory_core::asset::Asset;
use armory_core::error::RegistryError;
use armory_core::id::{AssetId, ClassId, Principal, TokenId};
use armory_store::{AdminSet, CustodyIndex, DelegationLedger, EquipGraph};

use crate::transfer::AssetTransferService;

/// The registry facade.
///
/// Owns the custody index, the equip graph, the delegation ledger, and the
/// admin list, and sequences every public operation: authorization first,
/// then precondition checks, then store mutation, with external transfer
/// calls positioned so a declined transfer leaves all state untouched.
///
/// Every mutating operation takes `&mut self`; exclusive access is the
/// serialized-transaction guarantee, and each operation either fully
/// commits or leaves no trace.
pub struct Registry<T: AssetTransferService> {
    custody: CustodyIndex,
    graph: EquipGraph,
    delegation: DelegationLedger,
    admins: AdminSet,
    transfer: T,
}

impl<T: AssetTransferService> Registry<T> {
    /// Create a registry over the given transfer service
    pub fn new(transfer: T) -> Self {
        Self {
            custody: CustodyIndex::new(),
            graph: EquipGraph::new(),
            delegation: DelegationLedger::new(),
            admins: AdminSet::new(),
            transfer,
        }
    }

    fn require_authorized(
        &self,
        owner: &Principal,
        actor: &Principal,
    ) -> Result<(), RegistryError> {
        if self.delegation.is_authorized(owner, actor) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                owner: *owner,
                actor: *actor,
            })
        }
    }

    /// Accept a deposit of an external asset and take it into custody.
    ///
    /// The asset id is derived deterministically from the deposit triple,
    /// so re-depositing the same triple after a withdrawal yields the same
    /// id again. Returns the created record, including the id the caller
    /// needs for later operations.
    pub fn deposit(
        &mut self,
        depositor: Principal,
        class: ClassId,
        token: TokenId,
    ) -> Result<Asset, RegistryError> {
        let id = AssetId::derive(&depositor, &class, token);
        let asset = Asset::new(id, class, token, depositor);

        // Transfer first: a declined transfer leaves custody untouched
        if let Err(err) = self.transfer.transfer_in(asset.external(), &depositor) {
            warn!("transfer_in declined for {}: {}", id, err);
            return Err(err.into());
        }
        self.custody.insert(asset.clone());
        debug!("deposited {} for {}", id, depositor);
        Ok(asset)
    }

    /// Release an asset from custody back to the external side.
    ///
    /// The requester must be the owner or a delegate, and the asset must
    /// not be equipped into anything.
    pub fn withdraw(&mut self, id: AssetId, requester: Principal) -> Result<(), RegistryError> {
        let asset = self
            .custody
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))?;
        self.require_authorized(&asset.owner, &requester)?;
        if self.graph.is_attached(&id) {
            return Err(RegistryError::AssetAttached(id));
        }

        // Transfer first: a declined transfer leaves custody untouched
        if let Err(err) = self.transfer.transfer_out(asset.external(), &requester) {
            warn!("transfer_out declined for {}: {}", id, err);
            return Err(err.into());
        }
        self.custody.remove(&id);
        debug!("withdrew {} to {}", id, requester);
        Ok(())
    }

    /// Equip one custodied asset into another.
    ///
    /// The requester must be authorized for the child's owner and,
    /// independently, for the parent's owner. Equipping never changes the
    /// child's owner and never touches the transfer service.
    pub fn equip(
        &mut self,
        child_id: AssetId,
        parent_id: AssetId,
        requester: Principal,
    ) -> Result<(), RegistryError> {
        let child_owner = self
            .custody
            .get(&child_id)
            .map(|asset| asset.owner)
            .ok_or(RegistryError::NotFound(child_id))?;
        let parent_owner = self
            .custody
            .get(&parent_id)
            .map(|asset| asset.owner)
            .ok_or(RegistryError::NotFound(parent_id))?;

        self.require_authorized(&child_owner, &requester)?;
        if self.graph.is_attached(&child_id) {
            return Err(RegistryError::AlreadyAttached(child_id));
        }
        self.require_authorized(&parent_owner, &requester)?;

        self.graph.attach(child_id, parent_id)?;
        debug!("equipped {} into {}", child_id, parent_id);
        Ok(())
    }

    /// Detach a child from the specified parent.
    ///
    /// The parent is resolved in the graph only, never in custody, so an
    /// authorized child owner can always detach, including from a parent
    /// that has since been withdrawn.
    pub fn unequip(
        &mut self,
        child_id: AssetId,
        parent_id: AssetId,
        requester: Principal,
    ) -> Result<(), RegistryError> {
        let child_owner = self
            .custody
            .get(&child_id)
            .map(|asset| asset.owner)
            .ok_or(RegistryError::NotFound(child_id))?;
        self.require_authorized(&child_owner, &requester)?;

        self.graph.detach(child_id, parent_id)?;
        debug!("unequipped {} from {}", child_id, parent_id);
        Ok(())
    }

    /// Grant `delegate` the right to act on `owner`'s assets. Idempotent.
    pub fn authorize(&mut self, owner: Principal, delegate: Principal) {
        self.delegation.authorize(owner, delegate);
    }

    /// Revoke a delegation edge. Idempotent.
    pub fn unauthorize(&mut self, owner: Principal, delegate: Principal) {
        self.delegation.unauthorize(&owner, &delegate);
    }

    /// Check whether `actor` may act on `owner`'s assets
    pub fn is_authorized(&self, owner: &Principal, actor: &Principal) -> bool {
        self.delegation.is_authorized(owner, actor)
    }

    /// Look up a custodied asset by id
    pub fn get_asset(&self, id: &AssetId) -> Option<&Asset> {
        self.custody.get(id)
    }

    /// Snapshot of an owner's current holdings, in insertion order
    pub fn get_by_owner(&self, owner: &Principal) -> Vec<Asset> {
        self.custody.assets_of(owner)
    }

    /// The assets currently equipped into a parent.
    ///
    /// Lenient read path: an unknown parent yields an empty vec, and child
    /// ids that no longer resolve in custody are skipped.
    pub fn get_equipped(&self, parent_id: &AssetId) -> Vec<Asset> {
        self.graph
            .children_of(parent_id)
            .iter()
            .filter_map(|id| self.custody.get(id).cloned())
            .collect()
    }

    /// Add a principal to the admin access list
    pub fn add_admin(&mut self, admin: Principal) {
        self.admins.add(admin);
    }

    /// Remove a principal from the admin access list
    pub fn remove_admin(&mut self, admin: &Principal) {
        self.admins.remove(admin);
    }

    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.admins.is_admin(principal)
    }

    /// The underlying transfer service
    pub fn transfer_service(&self) -> &T {
        &self.transfer
    }

    /// Mutable access to the underlying transfer service
    pub fn transfer_service_mut(&mut self) -> &mut T {
        &mut self.transfer
    }
}
