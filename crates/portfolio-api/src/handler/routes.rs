//! Route definitions
//!
//! - GET /api/portfolio - Portfolio aggregate
//! - POST /api/contact - Contact form submission

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use portfolio_core::{
    ContactAck, NewContactMessage, PortfolioData, ValidationError, CONTACT_PATH, PORTFOLIO_PATH,
};
use portfolio_storage::SharedStore;
use tower_http::trace::TraceLayer;

use super::ApiError;
use crate::config::{ConfigError, ServerConfig, DEFAULT_BODY_LIMIT};

/// Handler state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    /// Wrap a store. Prefer [`crate::startup::initialize`], which seeds
    /// the store first.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route(PORTFOLIO_PATH, get(get_portfolio))
        .route(CONTACT_PATH, post(submit_contact))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Router with request tracing and, when origins are configured, CORS
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let mut app =
        create_router_with_limit(state, config.body_limit).layer(TraceLayer::new_for_http());

    if let Some(cors) = config.cors_layer()? {
        app = app.layer(cors);
    }

    Ok(app)
}

/// GET /api/portfolio
///
/// An empty store yields the placeholder profile and empty lists, not an
/// error.
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioData>, ApiError> {
    let data = state
        .store
        .get_portfolio()
        .await
        .map_err(ApiError::PortfolioUnavailable)?;

    Ok(Json(data))
}

/// POST /api/contact
///
/// Shape and content are checked before the store is touched.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<Json<ContactAck>, ApiError> {
    let Json(input) =
        payload.map_err(|rejection| ValidationError::malformed(rejection.body_text()))?;
    let input = input.validated()?;

    state
        .store
        .create_contact_message(&input)
        .await
        .map_err(ApiError::ContactFailed)?;

    tracing::info!(backend = state.store.backend(), "Contact message stored");

    Ok(Json(ContactAck::accepted()))
}
