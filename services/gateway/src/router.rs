use crate::handlers::{account, market, social};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/accounts", post(account::create_account))
        .route("/accounts/{id}/balance", get(account::get_balance))
        .route("/accounts/{id}/peer", get(account::find_peer))
        .route("/artists/{id}", get(account::get_artist))
        .route("/artists/{id}/update", post(account::update_profile))
        .route("/artists/{id}/nfts", post(market::mint))
        .route(
            "/artists/{id}/followed-by/{follower_id}",
            post(social::follow),
        )
        .route(
            "/artists/{id}/unfollow/{follower_id}",
            post(social::unfollow),
        )
        .route("/market/{id}/for-sale", get(market::for_sale))
        .route(
            "/market/buy/{seller_id}/{buyer_id}/{asset_id}",
            post(market::purchase),
        );

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
