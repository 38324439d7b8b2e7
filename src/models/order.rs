use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub shipping_address: String,
    pub payment_method: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_date: DateTime<Utc>,
}

/// Checkout payload. Any client-side price fields are not part of the type
/// and are dropped during deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub product_id: Option<String>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
    pub quantity: Option<i32>,
}

/// Checkout input after validation, before the product is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub product_id: Uuid,
    pub shipping_address: String,
    pub payment_method: String,
    pub quantity: i32,
}

#[derive(Debug)]
pub struct NewOrder<'a> {
    pub user_id: Uuid,
    pub draft: &'a OrderDraft,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
}

/// Price of `quantity` units at `unit_price`.
pub fn total_price(unit_price: Decimal, quantity: i32) -> Decimal {
    unit_price * Decimal::from(quantity)
}
