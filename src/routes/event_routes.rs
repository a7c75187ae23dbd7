use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::event_controller::EventController;
use crate::dto::common::ApiResponse;
use crate::dto::event_dto::{CreateEventRequest, EventResponse};
use crate::middleware::auth::ActorId;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_event_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_event))
        .route("/:id", get(get_event))
}

async fn create_event(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.create(actor_id, request).await?;
    Ok(Json(response))
}

async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}
