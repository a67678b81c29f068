//! Reservation API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateReservationRequest, CreatedReservation, ReservationDetail};
use crate::AppState;

/// GET /reservations - List all reservations, newest first, with resource
/// names.
pub async fn list_reservations(
    State(state): State<AppState>,
) -> ApiResult<Vec<ReservationDetail>> {
    let reservations = state.store.list_reservations()?;
    success(reservations)
}

/// POST /reservations - Create a reservation.
///
/// Answers 400 for missing/malformed fields or an unknown resource id, 409
/// when the slot overlaps an existing reservation.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> ApiResult<CreatedReservation> {
    let new = request.validate()?;
    let reservation = state.store.create_reservation(&new)?;
    created(CreatedReservation { id: reservation.id })
}

/// GET /reservations/:id - Get a single reservation with its resource name.
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ReservationDetail> {
    let reservation = state.store.get_reservation(id)?;
    success(reservation)
}

/// DELETE /reservations/:id - Cancel a reservation. Answers 204 with no
/// body, skipping the JSON envelope.
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.store.delete_reservation(id)?;
    Ok(StatusCode::NO_CONTENT)
}
