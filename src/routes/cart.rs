use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::{AppError, Result},
    models::{AddToCartRequest, CartResponse, CartUpdateResponse},
    queries::{cart_queries, product_queries},
    utils::{
        extractors::{extract_user_id, is_blank, parse_product_id, JsonBody},
        jwt::Claims,
    },
    AppState,
};

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<AddToCartRequest>,
) -> Result<Json<CartUpdateResponse>> {
    let user_id = extract_user_id(&claims)?;

    let raw_id = payload.product_id.as_deref();
    if is_blank(raw_id) {
        return Err(AppError::Validation("Product ID is required".to_string()));
    }
    let product_id = parse_product_id(raw_id.unwrap_or_default())?;

    if product_queries::find_by_id(&state.db, product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let quantity = cart_queries::add_or_increment(&state.db, user_id, product_id).await?;
    tracing::info!(%user_id, %product_id, quantity, "Cart item added");

    let cart = cart_queries::get_items(&state.db, user_id).await?;

    Ok(Json(CartUpdateResponse {
        message: "Product added to cart".to_string(),
        cart,
    }))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<String>,
) -> Result<Json<CartUpdateResponse>> {
    let user_id = extract_user_id(&claims)?;
    let product_id = parse_product_id(&product_id)?;

    if !cart_queries::remove(&state.db, user_id, product_id).await? {
        return Err(AppError::NotFound("Item not found in cart".to_string()));
    }
    tracing::info!(%user_id, %product_id, "Cart item removed");

    let cart = cart_queries::get_items(&state.db, user_id).await?;

    Ok(Json(CartUpdateResponse {
        message: "Item removed from cart".to_string(),
        cart,
    }))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CartResponse>> {
    let user_id = extract_user_id(&claims)?;
    let cart = cart_queries::get_entries(&state.db, user_id).await?;

    Ok(Json(CartResponse { cart }))
}
