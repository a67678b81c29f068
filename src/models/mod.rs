//! Data models for the reservation application.
//!
//! These models match the frontend contract exactly: camelCase JSON,
//! `YYYY-MM-DD` dates and `HH:MM` times on the wire.

mod reservation;
mod resource;
mod slot;

pub use reservation::*;
pub use resource::*;
pub use slot::*;
