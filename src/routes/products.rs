use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    models::{CreateProductRequest, Product, ProductListResponse, ProductQuery},
    queries::product_queries,
    utils::{
        extractors::{extract_user_id, is_blank, parse_product_id, JsonBody},
        jwt::Claims,
    },
    AppState,
};

const DEFAULT_TITLE: &str = "Untitled listing";

/// Largest price `products.price NUMERIC(12, 2)` can hold.
const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let seller_id = extract_user_id(&claims)?;
    let (description, price) = validate_product(&payload)?;

    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);

    let product = product_queries::create_product(
        &state.db,
        seller_id,
        title,
        description,
        price,
        non_blank(&payload.image_path),
        non_blank(&payload.category),
    )
    .await?;

    tracing::info!(product_id = %product.id, %seller_id, "Product listed");

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;

    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<ProductListResponse>> {
    let products = product_queries::list(&state.db, non_blank(&params.category)).await?;

    Ok(Json(ProductListResponse { products }))
}

fn validate_product(payload: &CreateProductRequest) -> Result<(&str, Decimal)> {
    let (Some(description), Some(price)) = (payload.description.as_deref(), payload.price) else {
        return Err(AppError::Validation(
            "Description and price are required".to_string(),
        ));
    };

    if is_blank(Some(description)) {
        return Err(AppError::Validation(
            "Description and price are required".to_string(),
        ));
    }

    if price < Decimal::ZERO {
        return Err(AppError::Validation(
            "Price must not be negative".to_string(),
        ));
    }

    if price.normalize().scale() > 2 {
        return Err(AppError::Validation(
            "Price must have at most two decimal places".to_string(),
        ));
    }

    if price > MAX_PRICE {
        return Err(AppError::Validation(format!(
            "Price must not exceed {}",
            MAX_PRICE
        )));
    }

    Ok((description.trim(), price))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
