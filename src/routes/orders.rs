use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::{AppError, Result},
    models::{self, NewOrder, Order, OrderCreatedResponse, OrderDraft, PlaceOrderRequest},
    queries::{order_queries, product_queries},
    utils::{
        extractors::{extract_user_id, is_blank, parse_product_id, JsonBody},
        jwt::Claims,
    },
    AppState,
};

/// Missing-field message for cart checkout.
const CHECKOUT_FIELDS_REQUIRED: &str = "All fields are required.";
/// Missing-field message for buy-now. Differs from checkout by the trailing period; clients match on both.
const BUY_NOW_FIELDS_REQUIRED: &str = "All fields are required";

pub async fn place_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>)> {
    let user_id = extract_user_id(&claims)?;
    let draft = validate_order(&payload, CHECKOUT_FIELDS_REQUIRED)?;

    create_order(&state, user_id, draft).await
}

pub async fn buy_now(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>)> {
    let user_id = extract_user_id(&claims)?;
    let draft = validate_order(&payload, BUY_NOW_FIELDS_REQUIRED)?;

    create_order(&state, user_id, draft).await
}

pub async fn get_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Order>>> {
    let user_id = extract_user_id(&claims)?;
    let orders = order_queries::get_user_orders(&state.db, user_id).await?;

    Ok(Json(orders))
}

async fn create_order(
    state: &AppState,
    user_id: uuid::Uuid,
    draft: OrderDraft,
) -> Result<(StatusCode, Json<OrderCreatedResponse>)> {
    let product = product_queries::find_by_id(&state.db, draft.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let total_price = models::total_price(product.price, draft.quantity);

    let order = order_queries::create_order(
        &state.db,
        &NewOrder {
            user_id,
            draft: &draft,
            total_price,
        },
    )
    .await?;

    tracing::info!(
        order_id = %order.id,
        %user_id,
        product_id = %order.product_id,
        quantity = order.quantity,
        total_price = %order.total_price,
        "Order placed"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: "Order placed successfully".to_string(),
            order,
        }),
    ))
}

fn validate_order(payload: &PlaceOrderRequest, missing_fields_message: &str) -> Result<OrderDraft> {
    let (Some(product_id), Some(shipping_address), Some(payment_method), Some(quantity)) = (
        payload.product_id.as_deref(),
        payload.shipping_address.as_deref(),
        payload.payment_method.as_deref(),
        payload.quantity,
    ) else {
        return Err(AppError::Validation(missing_fields_message.to_string()));
    };

    if [product_id, shipping_address, payment_method]
        .into_iter()
        .any(|value| is_blank(Some(value)))
    {
        return Err(AppError::Validation(missing_fields_message.to_string()));
    }

    if quantity < 1 {
        return Err(AppError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }

    Ok(OrderDraft {
        product_id: parse_product_id(product_id)?,
        shipping_address: shipping_address.trim().to_string(),
        payment_method: payment_method.trim().to_string(),
        quantity,
    })
}
