pub mod admin;
pub mod custody;
pub mod delegation;
pub mod equip;

// Re-export the main types for convenience
pub use admin::AdminSet;
pub use custody::CustodyIndex;
pub use delegation::DelegationLedger;
pub use equip::EquipGraph;
