//! Cross-entity consistency tests for the marketplace core
//!
//! Exercises the relationship manager and exchange engine together
//! against the in-memory store:
//! - Follow symmetry and idempotency guards
//! - Purchase settlement arithmetic and asset movement
//! - Interleaving of social and trade writes on the same records
//! - The documented concurrent-follow lost-update race

use marketplace::store::AccountStore;
use marketplace::{ExchangeEngine, MemoryAccountStore, RelationshipManager};
use rust_decimal::Decimal;
use std::sync::Arc;
use types::account::Account;
use types::asset::Asset;
use types::ids::{AccountId, AssetId};

async fn seed_accounts(store: &MemoryAccountStore, usernames: &[&str]) -> Vec<AccountId> {
    let mut ids = Vec::new();
    for username in usernames {
        let account = Account::new(*username);
        ids.push(account.account_id);
        store.insert(account).await.unwrap();
    }
    ids
}

async fn seed_asset(store: &MemoryAccountStore, seller_id: AccountId, price: &str) -> AssetId {
    let mut seller = store.fetch(seller_id).await.unwrap();
    let asset = Asset::new("Consistency #1", price, "0", "/images/c1.png").unwrap();
    let asset_id = asset.asset_id;
    seller.nfts.created.push(asset);
    store.save(&seller).await.unwrap();
    asset_id
}

#[tokio::test]
async fn purchase_between_mutual_followers_touches_only_trade_sections() {
    let store = Arc::new(MemoryAccountStore::new());
    let ids = seed_accounts(&store, &["seller", "buyer"]).await;
    let social = RelationshipManager::new(store.clone());
    let exchange = ExchangeEngine::new(store.clone());

    social.follow(ids[0], ids[1]).await.unwrap();
    social.follow(ids[1], ids[0]).await.unwrap();

    let asset_id = seed_asset(&store, ids[0], "250").await;
    exchange.purchase(ids[0], ids[1], asset_id).await.unwrap();

    let seller = store.fetch(ids[0]).await.unwrap();
    let buyer = store.fetch(ids[1]).await.unwrap();

    // Settlement applied
    assert_eq!(seller.balance, Decimal::from(1249));
    assert_eq!(buyer.balance, Decimal::from(749));
    assert_eq!(seller.stats.sold, 1);
    assert_eq!(seller.stats.volume, Decimal::from(250));

    // The follow graph survived the projected writes
    assert!(seller.is_followed_by(&ids[1]));
    assert!(buyer.is_followed_by(&ids[0]));
    assert!(seller.follows(&ids[1]));
    assert!(buyer.follows(&ids[0]));
}

#[tokio::test]
async fn asset_lives_in_exactly_one_list_across_transfers() {
    let store = Arc::new(MemoryAccountStore::new());
    let ids = seed_accounts(&store, &["seller", "buyer", "bystander"]).await;
    let exchange = ExchangeEngine::new(store.clone());

    let asset_id = seed_asset(&store, ids[0], "10").await;
    exchange.purchase(ids[0], ids[1], asset_id).await.unwrap();

    let mut holders = 0;
    for id in &ids {
        let account = store.fetch(*id).await.unwrap();
        let in_created = account
            .nfts
            .created
            .iter()
            .any(|asset| asset.asset_id == asset_id);
        let in_owned = account
            .nfts
            .owned
            .iter()
            .any(|asset| asset.asset_id == asset_id);
        assert!(
            !(in_created && in_owned),
            "asset present in both lists of {}",
            account.username
        );
        if in_created || in_owned {
            holders += 1;
        }
    }
    assert_eq!(holders, 1, "asset must have exactly one holder");
}

#[tokio::test]
async fn repeated_purchases_accumulate_seller_stats() {
    let store = Arc::new(MemoryAccountStore::new());
    let ids = seed_accounts(&store, &["seller", "buyer"]).await;
    let exchange = ExchangeEngine::new(store.clone());

    for price in ["100", "50.5", "9"] {
        let asset_id = seed_asset(&store, ids[0], price).await;
        exchange.purchase(ids[0], ids[1], asset_id).await.unwrap();
    }

    let seller = store.fetch(ids[0]).await.unwrap();
    assert_eq!(seller.stats.sold, 3);
    assert_eq!(seller.stats.volume, "159.5".parse::<Decimal>().unwrap());

    let buyer = store.fetch(ids[1]).await.unwrap();
    assert_eq!(buyer.nfts.owned.len(), 3);
    assert_eq!(buyer.balance, "839.5".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn follow_after_unfollow_can_be_reestablished() {
    let store = Arc::new(MemoryAccountStore::new());
    let ids = seed_accounts(&store, &["alice", "bob"]).await;
    let social = RelationshipManager::new(store.clone());

    social.follow(ids[0], ids[1]).await.unwrap();
    social.unfollow(ids[0], ids[1]).await.unwrap();
    social.follow(ids[0], ids[1]).await.unwrap();

    let alice = store.fetch(ids[0]).await.unwrap();
    assert_eq!(alice.followers.len(), 1, "no duplicate entries per peer key");
}

// Known limitation: two concurrent follows against the same account can
// both read the follower list before either write lands, and one append
// is overwritten. The store has no conditional update, so only
// at-least-one is guaranteed.
#[tokio::test]
async fn concurrent_follows_record_at_least_one_follower() {
    let store = Arc::new(MemoryAccountStore::new());
    let ids = seed_accounts(&store, &["star", "fan1", "fan2"]).await;

    let manager1 = Arc::new(RelationshipManager::new(
        store.clone() as Arc<dyn AccountStore>
    ));
    let manager2 = manager1.clone();

    let (followed, fan1, fan2) = (ids[0], ids[1], ids[2]);
    let task1 = tokio::spawn(async move { manager1.follow(followed, fan1).await });
    let task2 = tokio::spawn(async move { manager2.follow(followed, fan2).await });

    task1.await.unwrap().unwrap();
    task2.await.unwrap().unwrap();

    let star = store.fetch(ids[0]).await.unwrap();
    assert!(
        !star.followers.is_empty(),
        "at least one follower must be recorded"
    );
    assert!(star.followers.len() <= 2);
    // Every recorded entry must be one of the two fans
    for peer in &star.followers {
        assert!(peer.account_id == fan1 || peer.account_id == fan2);
    }
}
