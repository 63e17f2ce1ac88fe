//! Types library for the NFT marketplace
//!
//! This library provides the core type definitions shared across the
//! marketplace services: account records, transferable assets, peer
//! reference snapshots, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Unique identifiers (AccountId, AssetId)
//! - `account`: Account records, stats, and relationship snapshots
//! - `asset`: Transferable digital assets with decimal-string prices
//! - `errors`: Error taxonomy

// Public modules
pub mod account;
pub mod asset;
pub mod errors;
pub mod ids;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::account::*;
    pub use crate::asset::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
}
