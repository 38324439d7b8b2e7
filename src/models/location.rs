use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Location {
    pub city: String,
    pub radius: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationRequest {
    pub city: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationsRequest {
    #[serde(default)]
    pub locations: Vec<LocationRequest>,
}

#[derive(Debug, Serialize)]
pub struct LocationAddedResponse {
    pub message: String,
    pub location: Location,
}

#[derive(Debug, Serialize)]
pub struct LocationsUpdateResponse {
    pub message: String,
    pub locations: Vec<Location>,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}
