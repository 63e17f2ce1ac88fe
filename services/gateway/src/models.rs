use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::asset::Asset;
use types::ids::AccountId;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub bio: String,
    pub avatar_url: String,
    pub banner_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub asset: Asset,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub account_id: AccountId,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorefrontResponse {
    pub account_id: AccountId,
    pub username: String,
    pub avatar_url: String,
    pub for_sale: Vec<Asset>,
}
