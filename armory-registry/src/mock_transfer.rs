use std::collections::HashMap;

use armory_core::asset::ExternalRef;
use armory_core::error::TransferError;
use armory_core::id::Principal;

use crate::transfer::AssetTransferService;

/// A transfer call observed by the mock, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferCall {
    In { asset: ExternalRef, from: Principal },
    Out { asset: ExternalRef, to: Principal },
}

/// Mock implementation of the AssetTransferService trait for testing
/// purposes.
///
/// Tracks a simulated external holder per asset, records every call for
/// later assertions, and can be scripted to decline upcoming transfers.
#[derive(Debug, Clone, Default)]
pub struct MockTransferService {
    /// Simulated external holder per asset
    external_owners: HashMap<ExternalRef, Principal>,
    /// Every call made against the mock, in order
    calls: Vec<TransferCall>,
    /// Number of upcoming transfers to decline
    fail_next: u32,
}

impl MockTransferService {
    /// Create a new MockTransferService
    pub fn new() -> Self {
        Self::default()
    }

    /// The principal the mock uses as the registry's external vault
    pub fn vault() -> Principal {
        Principal::new([0xFE; 32])
    }

    /// Seed the simulated external ownership table
    pub fn register_asset(&mut self, asset: ExternalRef, owner: Principal) {
        self.external_owners.insert(asset, owner);
    }

    /// Script the next `count` transfers (in or out) to be declined
    pub fn fail_next_transfers(&mut self, count: u32) {
        self.fail_next = count;
    }

    /// All calls observed so far, in order
    pub fn calls(&self) -> &[TransferCall] {
        &self.calls
    }

    fn take_scripted_failure(&mut self) -> Result<(), TransferError> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(TransferError::Declined("scripted failure".to_string()));
        }
        Ok(())
    }
}

impl AssetTransferService for MockTransferService {
    fn transfer_in(&mut self, asset: &ExternalRef, from: &Principal) -> Result<(), TransferError> {
        self.calls.push(TransferCall::In {
            asset: *asset,
            from: *from,
        });
        self.take_scripted_failure()?;

        // An asset the mock already tracks must be surrendered by its
        // current holder; untracked assets are accepted as-is
        if let Some(holder) = self.external_owners.get(asset) {
            if holder != from {
                return Err(TransferError::Declined(format!(
                    "asset is held by {}, not {}",
                    holder, from
                )));
            }
        }

        self.external_owners.insert(*asset, Self::vault());
        Ok(())
    }

    fn transfer_out(&mut self, asset: &ExternalRef, to: &Principal) -> Result<(), TransferError> {
        self.calls.push(TransferCall::Out {
            asset: *asset,
            to: *to,
        });
        self.take_scripted_failure()?;

        self.external_owners.insert(*asset, *to);
        Ok(())
    }

    fn current_external_owner(&self, asset: &ExternalRef) -> Result<Principal, TransferError> {
        self.external_owners
            .get(asset)
            .copied()
            .ok_or(TransferError::UnknownAsset)
    }
}
