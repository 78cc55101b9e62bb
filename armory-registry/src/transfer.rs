use armory_core::asset::ExternalRef;
use armory_core::error::TransferError;
use armory_core::id::Principal;

/// Boundary to the external mechanism that moves custody of the underlying
/// asset in and out of the registry.
///
/// Calls are synchronous from the core's perspective and must complete,
/// success or failure, before the registry operation returns; a failed
/// call fails the whole operation with no retry.
pub trait AssetTransferService {
    /// Pull the external asset from `from` into registry custody
    ///
    /// # Parameters
    /// * `asset` - The external (class, token) pair to transfer
    /// * `from` - The principal surrendering the asset
    ///
    /// # Returns
    /// Ok(()) if the external transfer completed, Err otherwise
    fn transfer_in(&mut self, asset: &ExternalRef, from: &Principal) -> Result<(), TransferError>;

    /// Release the external asset from registry custody to `to`
    ///
    /// # Parameters
    /// * `asset` - The external (class, token) pair to transfer
    /// * `to` - The principal receiving the asset
    ///
    /// # Returns
    /// Ok(()) if the external transfer completed, Err otherwise
    fn transfer_out(&mut self, asset: &ExternalRef, to: &Principal) -> Result<(), TransferError>;

    /// The asset's current holder on the external side.
    ///
    /// Used only for external validation; none of the registry's own
    /// invariants depend on it.
    fn current_external_owner(&self, asset: &ExternalRef) -> Result<Principal, TransferError>;
}
