//! Resa Backend
//!
//! A production-grade REST backend for a meeting-room reservation
//! application: clients browse resources and availability slots, book and
//! cancel reservations; administrators toggle resource availability. All
//! state lives in an in-memory store guarded by a single lock.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::ReservationStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReservationStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Resa Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if the admin PSK is not configured
    if config.admin_psk.is_none() {
        tracing::warn!("No admin PSK configured (RESA_ADMIN_PSK). Admin routes are open!");
    }

    // Initialize the in-memory store with the seed dataset
    let store = Arc::new(ReservationStore::new());
    let resources = store.list_resources()?;
    tracing::info!("Seeded {} resources", resources.len());

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration (the browser frontend calls this API directly)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.admin_psk.clone();

    // Admin routes, guarded by the PSK layer
    let admin_routes = Router::new()
        .route("/resources/{id}/active", patch(api::toggle_resource_active))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_psk_layer(psk.clone(), req, next)
        }));

    // Public routes
    let public_routes = Router::new()
        // Resources
        .route("/resources", get(api::list_resources))
        .route("/resources/{id}", get(api::get_resource))
        .route("/resources/{id}/availabilities", get(api::list_availabilities))
        .route("/resources/{id}/reservations", get(api::list_resource_reservations))
        // Reservations
        .route("/reservations", get(api::list_reservations))
        .route("/reservations", post(api::create_reservation))
        .route("/reservations/{id}", get(api::get_reservation))
        .route("/reservations/{id}", delete(api::delete_reservation))
        // Health check (no envelope)
        .route("/health", get(health_check));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
