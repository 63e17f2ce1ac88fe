//! Marketplace Core Service
//!
//! Account storage, relationship maintenance, and ownership transfer
//! for the NFT marketplace.
//!
//! **Consistency model:**
//! - Each operation is an independent read-modify-write over one or two
//!   account records.
//! - Records are persisted with separate, non-atomic writes; there is
//!   no multi-record transaction boundary.
//! - Within one operation, the record owning the relationship (or the
//!   seller) is always persisted before the counterpart. That ordering
//!   is the only cross-record guarantee.

pub mod exchange;
pub mod social;
pub mod store;

pub use exchange::{AssetDraft, ExchangeEngine, PurchaseReceipt};
pub use social::RelationshipManager;
pub use store::{AccountStore, MemoryAccountStore, Projection};
