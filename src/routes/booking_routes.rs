use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingResponse, BookingWithPricingResponse, CreateBookingRequest, PricingAuditResponse,
};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::ActorId;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_booking))
        .route("/mine", get(my_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/pricing-breakdown", get(pricing_breakdown))
        .route("/:id/activate", post(activate_booking))
        .route("/:id/complete", post(complete_booking))
        .route("/:id/cancel", post(cancel_booking))
}

async fn submit_booking(
    State(state): State<AppState>,
    ActorId(driver_id): ActorId,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingWithPricingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.submit(driver_id, request).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.get(actor_id, id).await?;
    Ok(Json(response))
}

async fn my_bookings(
    State(state): State<AppState>,
    ActorId(driver_id): ActorId,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.my_bookings(driver_id).await?;
    Ok(Json(response))
}

async fn pricing_breakdown(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PricingAuditResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.pricing_breakdown(actor_id, id).await?;
    Ok(Json(response))
}

async fn activate_booking(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.activate(actor_id, id).await?;
    Ok(Json(response))
}

async fn complete_booking(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.complete(actor_id, id).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    ActorId(actor_id): ActorId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.config.clone());
    let response = controller.cancel(actor_id, id).await?;
    Ok(Json(response))
}
