pub mod mock_transfer;
pub mod registry;
pub mod transfer;

// Re-export the main types for convenience
pub use mock_transfer::{MockTransferService, TransferCall};
pub use registry::Registry;
pub use transfer::AssetTransferService;
