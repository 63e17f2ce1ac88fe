use crate::error::AppError;
use crate::models::{PurchaseResponse, StorefrontResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use marketplace::{AccountStore, AssetDraft, Projection};
use std::time::Duration;
use types::asset::Asset;
use types::ids::{AccountId, AssetId};

pub async fn mint(
    State(state): State<AppState>,
    Path(creator_id): Path<AccountId>,
    Json(draft): Json<AssetDraft>,
) -> Result<Json<Asset>, AppError> {
    state.rate_limiter.check(
        &format!("{}:mint", creator_id),
        20,
        Duration::from_secs(60),
    )?;

    let asset = state.exchange.mint(creator_id, draft).await?;
    Ok(Json(asset))
}

pub async fn for_sale(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<StorefrontResponse>, AppError> {
    let account = state
        .store
        .fetch_projected(account_id, Projection::STOREFRONT)
        .await?;
    Ok(Json(StorefrontResponse {
        account_id,
        username: account.username,
        avatar_url: account.avatar_url,
        for_sale: account.nfts.created,
    }))
}

pub async fn purchase(
    State(state): State<AppState>,
    Path((seller_id, buyer_id, asset_id)): Path<(AccountId, AccountId, AssetId)>,
) -> Result<Json<PurchaseResponse>, AppError> {
    state.rate_limiter.check(
        &format!("{}:purchase", buyer_id),
        20,
        Duration::from_secs(60),
    )?;

    let receipt = state.exchange.purchase(seller_id, buyer_id, asset_id).await?;
    Ok(Json(PurchaseResponse {
        message: "Purchase successful".to_string(),
        asset: receipt.asset,
        price: receipt.price,
    }))
}
