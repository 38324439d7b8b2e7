use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, Result},
    models::{
        Location, LocationAddedResponse, LocationRequest, LocationsRequest, LocationsResponse,
        LocationsUpdateResponse,
    },
    queries::location_queries,
    utils::{
        extractors::{extract_user_id, is_blank, JsonBody},
        jwt::Claims,
    },
    AppState,
};

pub async fn add_location(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<LocationRequest>,
) -> Result<Json<LocationAddedResponse>> {
    let user_id = extract_user_id(&claims)?;
    let location = validate_location(payload)?;

    let location = location_queries::add_location(&state.db, user_id, &location).await?;

    Ok(Json(LocationAddedResponse {
        message: "Location added successfully".to_string(),
        location,
    }))
}

pub async fn replace_locations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<LocationsRequest>,
) -> Result<Json<LocationsUpdateResponse>> {
    let user_id = extract_user_id(&claims)?;

    let locations = payload
        .locations
        .into_iter()
        .map(validate_location)
        .collect::<Result<Vec<_>>>()?;

    let locations = location_queries::replace_locations(&state.db, user_id, &locations).await?;

    Ok(Json(LocationsUpdateResponse {
        message: "Locations updated successfully".to_string(),
        locations,
    }))
}

pub async fn get_locations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<LocationsResponse>> {
    let user_id = extract_user_id(&claims)?;
    let locations = location_queries::get_locations(&state.db, user_id).await?;

    Ok(Json(LocationsResponse { locations }))
}

fn validate_location(payload: LocationRequest) -> Result<Location> {
    match (payload.city, payload.radius) {
        (Some(city), Some(radius))
            if !is_blank(Some(city.as_str())) && !is_blank(Some(radius.as_str())) =>
        {
            Ok(Location {
                city: city.trim().to_string(),
                radius: radius.trim().to_string(),
            })
        }
        _ => Err(AppError::Validation(
            "City and radius are required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_location() {
        let location = validate_location(LocationRequest {
            city: Some(" New City ".to_string()),
            radius: Some("10 miles".to_string()),
        })
        .unwrap();
        assert_eq!(
            location,
            Location {
                city: "New City".to_string(),
                radius: "10 miles".to_string(),
            }
        );

        assert!(validate_location(LocationRequest {
            city: Some("City".to_string()),
            radius: None,
        })
        .is_err());
    }
}
