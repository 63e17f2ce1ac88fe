use crate::error::AppError;
use crate::models::AckResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Duration;
use types::ids::AccountId;

pub async fn follow(
    State(state): State<AppState>,
    Path((followed_id, follower_id)): Path<(AccountId, AccountId)>,
) -> Result<Json<AckResponse>, AppError> {
    state.rate_limiter.check(
        &format!("{}:follow", follower_id),
        30,
        Duration::from_secs(60),
    )?;

    state.social.follow(followed_id, follower_id).await?;
    Ok(Json(AckResponse::new("Followed successfully")))
}

pub async fn unfollow(
    State(state): State<AppState>,
    Path((followed_id, follower_id)): Path<(AccountId, AccountId)>,
) -> Result<Json<AckResponse>, AppError> {
    state.rate_limiter.check(
        &format!("{}:unfollow", follower_id),
        30,
        Duration::from_secs(60),
    )?;

    state.social.unfollow(followed_id, follower_id).await?;
    Ok(Json(AckResponse::new("Unfollowed successfully")))
}
