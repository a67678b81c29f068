//! Resource API endpoints.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::models::{Reservation, Resource, Slot};
use crate::AppState;

/// GET /resources - List all resources.
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<Resource>> {
    let resources = state.store.list_resources()?;
    success(resources)
}

/// GET /resources/:id - Get a single resource.
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Resource> {
    let resource = state.store.get_resource(id)?;
    success(resource)
}

/// GET /resources/:id/availabilities - List the still-available slots of a
/// resource. An empty list is a success, not an error.
pub async fn list_availabilities(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<Slot>> {
    let slots = state.store.list_availability(id)?;
    success(slots)
}

/// GET /resources/:id/reservations - List the reservations of a resource,
/// ordered by date then start time (the admin history view).
pub async fn list_resource_reservations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<Reservation>> {
    let reservations = state.store.list_reservations_for_resource(id)?;
    success(reservations)
}

/// PATCH /resources/:id/active - Flip a resource's active flag (admin).
pub async fn toggle_resource_active(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Resource> {
    let resource = state.store.toggle_resource_active(id)?;
    tracing::info!("Resource {} toggled to active={}", resource.id, resource.active);
    success(resource)
}
