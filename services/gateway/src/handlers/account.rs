use crate::error::AppError;
use crate::models::{BalanceResponse, CreateAccountRequest, UpdateProfileRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use marketplace::{AccountStore, Projection};
use std::time::Duration;
use types::account::{Account, PeerRef};
use types::ids::AccountId;

pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    let mut account = Account::new(payload.username);
    account.bio = payload.bio;

    state.store.insert(account.clone()).await?;
    Ok(Json(account))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Account>, AppError> {
    let account = state.store.fetch(account_id).await?;
    Ok(Json(account))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<Account>, AppError> {
    state.rate_limiter.check(
        &format!("{}:profile_update", account_id),
        10,
        Duration::from_secs(60),
    )?;

    // Follower snapshots elsewhere are deliberately not refreshed
    let mut account = state.store.fetch(account_id).await?;
    account.username = payload.username;
    account.bio = payload.bio;
    account.avatar_url = payload.avatar_url;
    account.banner_url = payload.banner_url;
    state.store.save(&account).await?;

    Ok(Json(account))
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<BalanceResponse>, AppError> {
    let account = state
        .store
        .fetch_projected(account_id, Projection::BALANCE)
        .await?;
    Ok(Json(BalanceResponse {
        account_id,
        balance: account.balance,
    }))
}

pub async fn find_peer(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<PeerRef>, AppError> {
    let account = state
        .store
        .fetch_projected(account_id, Projection::PROFILE)
        .await?;
    Ok(Json(account.peer_ref()))
}
