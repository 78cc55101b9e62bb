pub mod asset;
pub mod error;
pub mod id;

// Re-export the main types for convenience
pub use asset::{Asset, ExternalRef};
pub use error::{RegistryError, TransferError};
pub use id::{AssetId, ClassId, Principal, TokenId};
