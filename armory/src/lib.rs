//! Armory asset-custody registry
//!
//! This crate re-exports all the components of the Armory system.

pub use armory_core::*;
pub use armory_registry::*;
pub use armory_store::*;
