//! Reservation models matching the frontend Reservation interface.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::slot::{hhmm, parse_date, parse_time};
use crate::errors::AppError;

/// A confirmed booking of a resource for a specific slot.
///
/// The `[start_time, end_time)` interval is half-open; `created_at` is the
/// server-side creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub resource_id: i64,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// A reservation enriched with its resource name, as returned by the detail
/// and listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetail {
    pub id: i64,
    pub resource_id: i64,
    pub resource_name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl ReservationDetail {
    pub fn new(reservation: &Reservation, resource_name: &str) -> Self {
        Self {
            id: reservation.id,
            resource_id: reservation.resource_id,
            resource_name: resource_name.to_string(),
            date: reservation.date,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            created_at: reservation.created_at,
        }
    }
}

/// Request body for creating a reservation.
///
/// Every field is optional at the serde level so that a missing or
/// malformed field answers 400 through [`CreateReservationRequest::validate`]
/// instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub resource_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// A validated create payload with typed date and times.
#[derive(Debug, Clone, Copy)]
pub struct NewReservation {
    pub resource_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl CreateReservationRequest {
    /// Validate field presence, wire formats, and time ordering.
    ///
    /// Resource existence is checked by the store, which owns that state.
    pub fn validate(&self) -> Result<NewReservation, AppError> {
        let (Some(resource_id), Some(date), Some(start_time), Some(end_time)) = (
            self.resource_id,
            self.date.as_deref(),
            self.start_time.as_deref(),
            self.end_time.as_deref(),
        ) else {
            return Err(AppError::InvalidInput(
                "Missing required fields".to_string(),
            ));
        };

        let (Some(date), Some(start_time), Some(end_time)) =
            (parse_date(date), parse_time(start_time), parse_time(end_time))
        else {
            return Err(AppError::InvalidInput(
                "Invalid date or time format".to_string(),
            ));
        };

        if start_time >= end_time {
            return Err(AppError::InvalidInput(
                "Start time must be before end time".to_string(),
            ));
        }

        Ok(NewReservation {
            resource_id,
            date,
            start_time,
            end_time,
        })
    }
}

/// Creation response payload: the assigned reservation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReservation {
    pub id: i64,
}
