//! Account records, stats, and relationship snapshots
//!
//! An account is the unit of persistence: profile fields, balance,
//! cumulative sale stats, follower/following snapshot lists, and the
//! asset portfolio all live on one record.

use crate::asset::Asset;
use crate::ids::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance granted to every freshly created account
pub fn default_balance() -> Decimal {
    Decimal::from(999)
}

/// Cumulative sale statistics for a selling account
///
/// Both counters are monotonically non-decreasing; `record_sale` is the
/// only mutation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    pub volume: Decimal,
    pub sold: u64,
}

impl AccountStats {
    /// Record one completed sale at the given price.
    pub fn record_sale(&mut self, price: Decimal) {
        self.volume += price;
        self.sold += 1;
    }
}

/// Denormalized snapshot of another account
///
/// Taken at the moment the relationship was formed and never refreshed:
/// later profile edits on the referenced account do not propagate here.
/// This staleness is the contract, not a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRef {
    pub account_id: AccountId,
    pub username: String,
    pub avatar_url: String,
}

/// Asset holdings of an account
///
/// An asset minted by this account sits in `created` until sold, then
/// lives in the buyer's `owned`. `collections` is carried as-is and not
/// touched by transfer logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub created: Vec<Asset>,
    #[serde(default)]
    pub owned: Vec<Asset>,
    #[serde(default)]
    pub collections: Vec<Asset>,
}

/// A user's persistent record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    pub avatar_url: String,
    pub banner_url: String,
    #[serde(default = "default_balance")]
    pub balance: Decimal,
    #[serde(default)]
    pub stats: AccountStats,
    #[serde(default)]
    pub followers: Vec<PeerRef>,
    #[serde(default)]
    pub followings: Vec<PeerRef>,
    #[serde(default)]
    pub nfts: Portfolio,
}

impl Account {
    /// Create a fresh account with defaulted balance, stats, and images.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            account_id: AccountId::new(),
            username: username.into(),
            bio: String::new(),
            avatar_url: "/images/avatar1.png".to_string(),
            banner_url: "/images/banner1.png".to_string(),
            balance: default_balance(),
            stats: AccountStats::default(),
            followers: Vec::new(),
            followings: Vec::new(),
            nfts: Portfolio::default(),
        }
    }

    /// Snapshot this account for inclusion in a peer's relationship list.
    pub fn peer_ref(&self) -> PeerRef {
        PeerRef {
            account_id: self.account_id,
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }

    /// Check whether `id` appears in this account's follower list.
    pub fn is_followed_by(&self, id: &AccountId) -> bool {
        self.followers.iter().any(|peer| peer.account_id == *id)
    }

    /// Check whether this account follows `id`.
    pub fn follows(&self, id: &AccountId) -> bool {
        self.followings.iter().any(|peer| peer.account_id == *id)
    }
}
