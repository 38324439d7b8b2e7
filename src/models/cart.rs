use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// One cart line as stored: a product reference and a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// One cart line with its product resolved, so clients can render the cart
/// without further lookups.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartEntry {
    #[serde(rename = "productId")]
    #[sqlx(flatten)]
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CartUpdateResponse {
    pub message: String,
    pub cart: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Vec<CartEntry>,
}
