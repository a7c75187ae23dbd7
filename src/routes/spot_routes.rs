use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::spot_controller::SpotController;
use crate::dto::common::ApiResponse;
use crate::dto::event_dto::EventResponse;
use crate::dto::spot_dto::{AvailabilityQuery, AvailabilityResponse, CreateSpotRequest, SpotResponse};
use crate::middleware::auth::ActorId;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_spot_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_spot))
        .route("/mine", get(my_spots))
        .route("/:id", get(get_spot))
        .route("/:id/deactivate", post(deactivate_spot))
        .route("/:id/events", get(spot_events))
        .route("/:id/availability", get(spot_availability))
}

async fn create_spot(
    State(state): State<AppState>,
    ActorId(owner_id): ActorId,
    Json(request): Json<CreateSpotRequest>,
) -> Result<Json<ApiResponse<SpotResponse>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.create(owner_id, request).await?;
    Ok(Json(response))
}

async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SpotResponse>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn my_spots(
    State(state): State<AppState>,
    ActorId(owner_id): ActorId,
) -> Result<Json<ApiResponse<Vec<SpotResponse>>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.my_spots(owner_id).await?;
    Ok(Json(response))
}

async fn deactivate_spot(
    State(state): State<AppState>,
    ActorId(owner_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SpotResponse>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.deactivate(owner_id, id).await?;
    Ok(Json(response))
}

async fn spot_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<EventResponse>>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.events(id).await?;
    Ok(Json(response))
}

async fn spot_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, AppError> {
    let controller = SpotController::new(state.pool.clone());
    let response = controller.availability(id, query).await?;
    Ok(Json(response))
}
