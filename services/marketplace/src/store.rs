//! Account Store — keyed persistence of user records
//!
//! The store is the only shared mutable resource in the system. Records
//! are fetched in full or projected to a subset of sections, mutated in
//! memory, and written back independently. The store offers no
//! conditional updates and no row locks; callers that touch two records
//! issue two separate saves (see `social` and `exchange` for the
//! consequences).

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use types::account::{Account, AccountStats, Portfolio};
use types::errors::StoreError;
use types::ids::AccountId;

/// Sections of an account record selected by a projected fetch or save.
///
/// Mirrors path-level projection in a document store: a projected fetch
/// returns a record with unselected sections defaulted, and a projected
/// save writes back only the selected sections, leaving the rest of the
/// stored record untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub profile: bool,
    pub balance: bool,
    pub stats: bool,
    pub social: bool,
    pub nfts: bool,
}

impl Projection {
    /// Nothing selected; base for struct-update composition.
    pub const NONE: Self = Self {
        profile: false,
        balance: false,
        stats: false,
        social: false,
        nfts: false,
    };

    /// Everything; equivalent to an unprojected fetch.
    pub const FULL: Self = Self {
        profile: true,
        balance: true,
        stats: true,
        social: true,
        nfts: true,
    };

    /// Seller side of a purchase: {balance, nfts, stats}.
    pub const SETTLEMENT: Self = Self {
        balance: true,
        stats: true,
        nfts: true,
        ..Self::NONE
    };

    /// Buyer side of a purchase: {balance, nfts}.
    pub const WALLET: Self = Self {
        balance: true,
        nfts: true,
        ..Self::NONE
    };

    /// Lightweight peer lookup: profile fields only.
    pub const PROFILE: Self = Self {
        profile: true,
        ..Self::NONE
    };

    /// Balance only.
    pub const BALANCE: Self = Self {
        balance: true,
        ..Self::NONE
    };

    /// Storefront listing: profile fields plus the asset portfolio.
    pub const STOREFRONT: Self = Self {
        profile: true,
        nfts: true,
        ..Self::NONE
    };
}

/// Durable keyed storage of account records
///
/// The external-collaborator seam: everything above this trait is
/// storage-agnostic.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Load a record in full.
    async fn fetch(&self, id: AccountId) -> Result<Account, StoreError>;

    /// Load selected sections; unselected sections come back defaulted.
    async fn fetch_projected(
        &self,
        id: AccountId,
        projection: Projection,
    ) -> Result<Account, StoreError>;

    /// Replace the stored record wholesale.
    async fn save(&self, account: &Account) -> Result<(), StoreError>;

    /// Write back only the selected sections of the record.
    async fn save_projected(
        &self,
        account: &Account,
        projection: Projection,
    ) -> Result<(), StoreError>;

    /// Insert a fresh record; fails on a duplicate key.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;
}

/// In-memory account store backed by a concurrent map
///
/// `save` is a whole-record replace: concurrent writers to the same
/// record race last-write-wins, exactly the consistency the system is
/// specified against.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn fetch(&self, id: AccountId) -> Result<Account, StoreError> {
        self.accounts
            .get(&id)
            .map(|record| record.clone())
            .ok_or(StoreError::NotFound { account_id: id })
    }

    async fn fetch_projected(
        &self,
        id: AccountId,
        projection: Projection,
    ) -> Result<Account, StoreError> {
        self.accounts
            .get(&id)
            .map(|record| project(&record, projection))
            .ok_or(StoreError::NotFound { account_id: id })
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        match self.accounts.entry(account.account_id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(account.clone());
                Ok(())
            }
            // Saving a record that was never inserted is a caller bug
            Entry::Vacant(_) => Err(StoreError::NotFound {
                account_id: account.account_id,
            }),
        }
    }

    async fn save_projected(
        &self,
        account: &Account,
        projection: Projection,
    ) -> Result<(), StoreError> {
        let mut stored =
            self.accounts
                .get_mut(&account.account_id)
                .ok_or(StoreError::NotFound {
                    account_id: account.account_id,
                })?;
        merge(&mut stored, account, projection);
        Ok(())
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        match self.accounts.entry(account.account_id) {
            Entry::Occupied(_) => Err(StoreError::Backend {
                message: format!("duplicate account id: {}", account.account_id),
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(account);
                Ok(())
            }
        }
    }
}

/// Copy the selected sections out of a stored record.
fn project(stored: &Account, projection: Projection) -> Account {
    let mut record = Account {
        account_id: stored.account_id,
        username: String::new(),
        bio: String::new(),
        avatar_url: String::new(),
        banner_url: String::new(),
        balance: Decimal::ZERO,
        stats: AccountStats::default(),
        followers: Vec::new(),
        followings: Vec::new(),
        nfts: Portfolio::default(),
    };

    if projection.profile {
        record.username = stored.username.clone();
        record.bio = stored.bio.clone();
        record.avatar_url = stored.avatar_url.clone();
        record.banner_url = stored.banner_url.clone();
    }
    if projection.balance {
        record.balance = stored.balance;
    }
    if projection.stats {
        record.stats = stored.stats.clone();
    }
    if projection.social {
        record.followers = stored.followers.clone();
        record.followings = stored.followings.clone();
    }
    if projection.nfts {
        record.nfts = stored.nfts.clone();
    }
    record
}

/// Overwrite only the selected sections of a stored record.
fn merge(stored: &mut Account, incoming: &Account, projection: Projection) {
    if projection.profile {
        stored.username = incoming.username.clone();
        stored.bio = incoming.bio.clone();
        stored.avatar_url = incoming.avatar_url.clone();
        stored.banner_url = incoming.banner_url.clone();
    }
    if projection.balance {
        stored.balance = incoming.balance;
    }
    if projection.stats {
        stored.stats = incoming.stats.clone();
    }
    if projection.social {
        stored.followers = incoming.followers.clone();
        stored.followings = incoming.followings.clone();
    }
    if projection.nfts {
        stored.nfts = incoming.nfts.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::asset::Asset;

    fn account_with_asset(username: &str, title: &str, price: &str) -> Account {
        let mut account = Account::new(username);
        account
            .nfts
            .created
            .push(Asset::new(title, price, "", "/images/a.png").unwrap());
        account
    }

    #[tokio::test]
    async fn test_fetch_missing_record() {
        let store = MemoryAccountStore::new();
        let id = AccountId::new();
        let err = store.fetch(id).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { account_id: id });
    }

    #[tokio::test]
    async fn test_insert_then_fetch() {
        let store = MemoryAccountStore::new();
        let account = Account::new("alice");
        let id = account.account_id;

        store.insert(account.clone()).await.unwrap();
        assert_eq!(store.fetch(id).await.unwrap(), account);
    }

    #[tokio::test]
    async fn test_insert_duplicate_rejected() {
        let store = MemoryAccountStore::new();
        let account = Account::new("alice");

        store.insert(account.clone()).await.unwrap();
        let err = store.insert(account).await.unwrap_err();
        assert!(matches!(err, StoreError::Backend { .. }));
    }

    #[tokio::test]
    async fn test_save_requires_existing_record() {
        let store = MemoryAccountStore::new();
        let account = Account::new("ghost");
        assert!(store.save(&account).await.is_err());
    }

    #[tokio::test]
    async fn test_projected_fetch_defaults_unselected_sections() {
        let store = MemoryAccountStore::new();
        let mut account = account_with_asset("seller", "Art #1", "250");
        account.followers.push(Account::new("fan").peer_ref());
        let id = account.account_id;
        store.insert(account).await.unwrap();

        let projected = store.fetch_projected(id, Projection::WALLET).await.unwrap();
        assert_eq!(projected.nfts.created.len(), 1);
        assert_eq!(projected.balance, Decimal::from(999));
        // Unselected sections come back empty
        assert!(projected.username.is_empty());
        assert!(projected.followers.is_empty());
        assert_eq!(projected.stats, AccountStats::default());
    }

    #[tokio::test]
    async fn test_projected_save_preserves_unselected_sections() {
        let store = MemoryAccountStore::new();
        let mut account = account_with_asset("seller", "Art #1", "250");
        account.followers.push(Account::new("fan").peer_ref());
        let id = account.account_id;
        store.insert(account).await.unwrap();

        // Settlement-style write: mutate balance/nfts/stats only
        let mut working = store
            .fetch_projected(id, Projection::SETTLEMENT)
            .await
            .unwrap();
        working.balance += Decimal::from(250);
        working.nfts.created.clear();
        working.stats.record_sale(Decimal::from(250));
        store
            .save_projected(&working, Projection::SETTLEMENT)
            .await
            .unwrap();

        let stored = store.fetch(id).await.unwrap();
        assert_eq!(stored.balance, Decimal::from(1249));
        assert!(stored.nfts.created.is_empty());
        assert_eq!(stored.stats.sold, 1);
        // Sections outside the projection survived the write
        assert_eq!(stored.username, "seller");
        assert_eq!(stored.followers.len(), 1);
    }

    #[tokio::test]
    async fn test_full_save_replaces_record() {
        let store = MemoryAccountStore::new();
        let mut account = Account::new("alice");
        let id = account.account_id;
        store.insert(account.clone()).await.unwrap();

        account.bio = "painter".to_string();
        store.save(&account).await.unwrap();
        assert_eq!(store.fetch(id).await.unwrap().bio, "painter");
    }
}
