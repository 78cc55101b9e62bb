use crate::id::{AssetId, ClassId, Principal, TokenId};
use serde::{Deserialize, Serialize};

/// The (class, token) pair an asset is known by outside the registry.
///
/// This is the address the external transfer service operates on; the
/// registry itself only ever moves custody of the pair as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalRef {
    /// The external asset class/contract
    pub class: ClassId,

    /// The asset's identifier within its class
    pub token: TokenId,
}

impl ExternalRef {
    pub fn new(class: ClassId, token: TokenId) -> Self {
        Self { class, token }
    }
}

/// An asset held in registry custody.
///
/// The `id` is derived deterministically from the deposit triple and is
/// immutable once assigned. `owner` is the principal the registry
/// currently recognizes as controlling the asset; equipping never
/// changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier for this asset
    pub id: AssetId,

    /// Where the asset lives outside the registry
    pub external: ExternalRef,

    /// The principal currently recognized as controlling this asset
    pub owner: Principal,
}

impl Asset {
    /// Create a new asset record
    pub fn new(id: AssetId, class: ClassId, token: TokenId, owner: Principal) -> Self {
        Self {
            id,
            external: ExternalRef::new(class, token),
            owner,
        }
    }

    /// Get the asset ID
    pub fn id(&self) -> &AssetId {
        &self.id
    }

    /// Get the owner
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Get the external reference
    pub fn external(&self) -> &ExternalRef {
        &self.external
    }

    /// Get the external asset class
    pub fn class(&self) -> &ClassId {
        &self.external.class
    }

    /// Get the external token identifier
    pub fn token(&self) -> TokenId {
        self.external.token
    }
}
