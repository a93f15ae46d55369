//! Plant endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Plant, PlantRepo};
use crate::error::ApiError;
use crate::models::{ImageRef, NewPlant, PlantName, Price, ValidationError};
use crate::server::AppState;

/// Create plant request
///
/// Fields are optional at the serde level so a missing field reports 400
/// with the field name instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct CreatePlantRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

impl CreatePlantRequest {
    fn validate(self) -> Result<NewPlant, ValidationError> {
        let name = self
            .name
            .ok_or(ValidationError::Missing { field: "name" })?;
        let image = self
            .image
            .ok_or(ValidationError::Missing { field: "image" })?;
        let price = self
            .price
            .ok_or(ValidationError::Missing { field: "price" })?;

        Ok(NewPlant {
            name: PlantName::new(&name)?,
            image: ImageRef::new(&image)?,
            price: Price::new(price)?,
        })
    }
}

/// Plant response
#[derive(Serialize)]
pub struct PlantResponse {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub created_at: String,
}

impl From<Plant> for PlantResponse {
    fn from(p: Plant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            image: p.image,
            price: p.price,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// GET /plants - list all plants
async fn list_plants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlantResponse>>, ApiError> {
    let plants = PlantRepo::new(&state.pool).list().await?;
    Ok(Json(plants.into_iter().map(PlantResponse::from).collect()))
}

/// POST /plants - create a new plant
///
/// The body is extracted as a Result so malformed JSON and wrong-typed
/// fields come back as the standard 400 error body, not axum's plain-text
/// rejection.
async fn create_plant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePlantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlantResponse>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        ValidationError::InvalidBody {
            reason: rejection.body_text(),
        }
    })?;
    let new_plant = req.validate()?;
    let plant = PlantRepo::new(&state.pool).create(new_plant).await?;

    Ok((StatusCode::CREATED, Json(PlantResponse::from(plant))))
}

/// GET /plants/{id} - get a single plant
async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PlantResponse>, ApiError> {
    let plant = PlantRepo::new(&state.pool).get(id).await?;
    Ok(Json(PlantResponse::from(plant)))
}

/// Plant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plants", get(list_plants).post(create_plant))
        .route("/plants/{id}", get(get_plant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_name() {
        let req = CreatePlantRequest {
            name: None,
            image: Some("./aloe.jpg".into()),
            price: Some(1.0),
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "name" }));
    }

    #[test]
    fn validate_rejects_missing_price() {
        let req = CreatePlantRequest {
            name: Some("Aloe".into()),
            image: Some("./aloe.jpg".into()),
            price: None,
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "price" }));
    }

    #[test]
    fn validate_accepts_complete_request() {
        let req = CreatePlantRequest {
            name: Some("Aloe".into()),
            image: Some("./aloe.jpg".into()),
            price: Some(11.50),
        };
        let plant = req.validate().expect("valid request");
        assert_eq!(plant.name.as_str(), "Aloe");
        assert_eq!(plant.price.value(), 11.50);
    }
}
