//! Exchange Engine — ownership transfer and balance settlement
//!
//! A purchase moves one asset from the seller's created list to the
//! buyer's owned list, settles balances, and bumps seller stats. The
//! two record writes are independent and seller-first: a failure after
//! the seller write leaves the asset out of both lists with no
//! compensating rollback. Affordability is not gated here; the buyer's
//! balance may go negative. The surrounding API layer is expected to
//! check funds before calling.

use crate::store::{AccountStore, Projection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use types::asset::Asset;
use types::errors::{StoreError, TradeError};
use types::ids::{AccountId, AssetId};

/// Fields supplied by the creator at mint time; the key is assigned here.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDraft {
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub highest_bid: String,
    pub image_url: String,
}

/// Outcome of a completed purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseReceipt {
    /// The transferred asset, unmodified
    pub asset: Asset,
    /// The settled amount parsed from the asset's price string
    pub price: Decimal,
}

/// Executes ownership transfers and minting against the account store.
pub struct ExchangeEngine {
    store: Arc<dyn AccountStore>,
}

impl ExchangeEngine {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Transfer `asset_id` from seller to buyer and settle balances.
    ///
    /// The seller is loaded projected to {balance, nfts, stats}, the
    /// buyer to {balance, nfts}; the projected saves write back only
    /// those sections, so follower lists and profile fields are never
    /// clobbered by a purchase.
    pub async fn purchase(
        &self,
        seller_id: AccountId,
        buyer_id: AccountId,
        asset_id: AssetId,
    ) -> Result<PurchaseReceipt, TradeError> {
        let mut seller = match self
            .store
            .fetch_projected(seller_id, Projection::SETTLEMENT)
            .await
        {
            Ok(account) => account,
            Err(StoreError::NotFound { account_id }) => {
                return Err(TradeError::SellerNotFound { account_id })
            }
            Err(err) => return Err(err.into()),
        };
        let mut buyer = match self.store.fetch_projected(buyer_id, Projection::WALLET).await {
            Ok(account) => account,
            Err(StoreError::NotFound { account_id }) => {
                return Err(TradeError::BuyerNotFound { account_id })
            }
            Err(err) => return Err(err.into()),
        };

        // Covers wrong id, already sold, and never-owned alike
        let position = seller
            .nfts
            .created
            .iter()
            .position(|asset| asset.asset_id == asset_id)
            .ok_or(TradeError::AssetNotFound { asset_id })?;

        // Parse before any mutation so a malformed record fails the
        // operation instead of corrupting balances
        let price = seller.nfts.created[position].parse_price()?;

        let asset = seller.nfts.created.remove(position);
        buyer.nfts.owned.push(asset.clone());

        seller.balance += price;
        buyer.balance -= price;
        seller.stats.record_sale(price);

        // Seller lands first; the pair is not atomic. A buyer-side
        // failure here orphans the asset.
        self.store
            .save_projected(&seller, Projection::SETTLEMENT)
            .await?;
        self.store.save_projected(&buyer, Projection::WALLET).await?;

        info!(%seller_id, %buyer_id, %asset_id, %price, "purchase settled");
        Ok(PurchaseReceipt { asset, price })
    }

    /// Mint a new asset into the creator's created list.
    ///
    /// The price is validated here; a draft with an unparseable price
    /// never reaches the store.
    pub async fn mint(
        &self,
        creator_id: AccountId,
        draft: AssetDraft,
    ) -> Result<Asset, TradeError> {
        let mut creator = match self.store.fetch(creator_id).await {
            Ok(account) => account,
            Err(StoreError::NotFound { account_id }) => {
                return Err(TradeError::CreatorNotFound { account_id })
            }
            Err(err) => return Err(err.into()),
        };

        let asset = Asset::new(draft.title, draft.price, draft.highest_bid, draft.image_url)?;
        creator.nfts.created.push(asset.clone());
        self.store.save(&creator).await?;

        info!(%creator_id, asset_id = %asset.asset_id, "asset minted");
        Ok(asset)
    }
}
