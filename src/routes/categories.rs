use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{Category, CategoryCreatedResponse, CategoryListResponse, CreateCategoryRequest},
    queries::category_queries,
    utils::extractors::{is_blank, JsonBody},
    AppState,
};

pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
    }))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Category>> {
    let category = category_queries::find_by_code(&state.db, &code)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryCreatedResponse>)> {
    let fields = [
        &payload.title,
        &payload.sub_title,
        &payload.code,
        &payload.image_url,
    ];
    if fields.iter().any(|f| is_blank(f.as_deref())) {
        return Err(AppError::Validation(
            "Title, subTitle, code and imageUrl are required".to_string(),
        ));
    }

    let [title, sub_title, code, image_url] =
        fields.map(|f| f.as_deref().map(str::trim).unwrap_or_default());

    let category =
        category_queries::create_category(&state.db, title, sub_title, code, image_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryCreatedResponse {
            success: true,
            category,
        }),
    ))
}
