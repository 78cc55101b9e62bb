use crate::id::{AssetId, Principal};
use thiserror::Error;

/// Errors returned by the external asset transfer service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The transfer service declined or reverted the transfer
    #[error("Transfer declined: {0}")]
    Declined(String),

    /// The external asset is unknown to the transfer service
    #[error("External asset unknown to the transfer service")]
    UnknownAsset,
}

/// Represents all possible errors surfaced by registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The referenced asset id does not exist in custody
    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    /// The caller lacks delegation or ownership over the referenced asset
    #[error("Not authorized: {actor} cannot act for {owner}")]
    Unauthorized { owner: Principal, actor: Principal },

    /// Equip attempted on a currently-attached child
    #[error("Asset {0} is already equipped")]
    AlreadyAttached(AssetId),

    /// Unequip attempted on a currently-free child
    #[error("Asset {0} is not equipped")]
    NotAttached(AssetId),

    /// The child is attached, but not to the specified parent
    #[error("Asset {child} is not equipped into {parent}")]
    NotAttachedToParent { child: AssetId, parent: AssetId },

    /// Withdrawal attempted while the asset is still equipped
    #[error("Asset {0} is equipped and cannot be withdrawn")]
    AssetAttached(AssetId),

    /// The external transfer service declined or reverted
    #[error("Transfer failed: {0}")]
    Transfer(#[from] TransferError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Anyhow error wrapper for error context
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}

impl From<bincode::Error> for RegistryError {
    fn from(err: bincode::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}
