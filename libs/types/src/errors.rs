//! Error types for the marketplace
//!
//! Comprehensive error taxonomy using thiserror. All errors are
//! terminal for the current operation: no retry, no partial-success
//! reporting, and no rollback of writes already applied.

use crate::ids::{AccountId, AssetId};
use thiserror::Error;

/// Storage-layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Account not found: {account_id}")]
    NotFound { account_id: AccountId },

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

/// Asset-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Malformed price string: {raw:?}")]
    MalformedPrice { raw: String },
}

/// Relationship maintenance errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SocialError {
    #[error("Account not found: {account_id}")]
    AccountNotFound { account_id: AccountId },

    #[error("Account {follower_id} is already following {followed_id}")]
    AlreadyFollowing {
        followed_id: AccountId,
        follower_id: AccountId,
    },

    #[error("Account {account_id} cannot follow itself")]
    SelfFollow { account_id: AccountId },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Ownership transfer and minting errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("Seller not found: {account_id}")]
    SellerNotFound { account_id: AccountId },

    #[error("Buyer not found: {account_id}")]
    BuyerNotFound { account_id: AccountId },

    #[error("Creator not found: {account_id}")]
    CreatorNotFound { account_id: AccountId },

    #[error("Asset not found in seller's created list: {asset_id}")]
    AssetNotFound { asset_id: AssetId },

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
