use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{CreateEventRequest, Event, EventListResponse},
    queries::event_queries,
    utils::extractors::{is_blank, JsonBody},
    AppState,
};

pub async fn get_events(State(state): State<AppState>) -> Result<Json<EventListResponse>> {
    let events = event_queries::get_all(&state.db).await?;
    tracing::debug!("Fetched {} events", events.len());

    Ok(Json(EventListResponse { events }))
}

pub async fn get_events_by_category(
    State(state): State<AppState>,
    Path(category_code): Path<String>,
) -> Result<Json<Vec<Event>>> {
    let events = event_queries::find_by_category(&state.db, &category_code).await?;

    if events.is_empty() {
        return Err(AppError::NotFound(
            "No events found for this category".to_string(),
        ));
    }

    Ok(Json(events))
}

pub async fn add_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    validate_event(&payload)?;

    let (Some(start_date), Some(end_date)) = (payload.start_date, payload.end_date) else {
        return Err(AppError::Validation(
            "Start and end dates are required".to_string(),
        ));
    };

    let event = event_queries::create_event(
        &state.db,
        payload.title.as_deref().unwrap_or_default().trim(),
        payload.description.as_deref().unwrap_or_default().trim(),
        start_date,
        end_date,
        payload.image_url.as_deref(),
        payload.category_code.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

fn validate_event(payload: &CreateEventRequest) -> Result<()> {
    if is_blank(payload.title.as_deref()) || is_blank(payload.description.as_deref()) {
        return Err(AppError::Validation(
            "Title and description are required".to_string(),
        ));
    }

    if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
        if end < start {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
    }

    Ok(())
}
