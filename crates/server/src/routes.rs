pub mod admins;
pub mod auth;
pub mod catalog;
pub mod manuals;
pub mod printables;
pub mod reports;
pub mod tasks;
pub mod uploads;

use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::errors::ApiError;
use auth::ServerState;
use common::types::Health;

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

// Axum's built-in 405 has an empty body; the frontend expects the error
// envelope everywhere.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route(
            "/auth/login",
            post(auth::login).fallback(method_not_allowed),
        )
        .route(
            "/products",
            get(catalog::get_or_list)
                .post(catalog::create)
                .put(catalog::update)
                .delete(catalog::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/manuals",
            get(manuals::get).put(manuals::update).fallback(method_not_allowed),
        )
        .route(
            "/printable-items",
            get(printables::items_get_or_list)
                .post(printables::items_create)
                .put(printables::items_update)
                .delete(printables::items_delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/printable-inventory",
            get(printables::inventory_list)
                .post(printables::inventory_create)
                .put(printables::inventory_update)
                .delete(printables::inventory_delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/reports",
            get(reports::list)
                .post(reports::create)
                .put(reports::update)
                .delete(reports::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks",
            get(tasks::list)
                .post(tasks::create)
                .put(tasks::update)
                .delete(tasks::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/admins",
            get(admins::list)
                .post(admins::create)
                .delete(admins::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/uploads",
            post(uploads::upload_image).fallback(method_not_allowed),
        );

    // Auth runs inside CORS so preflights are answered before any token
    // check; the middleware whitelists OPTIONS anyway.
    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token_state,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .with_state(state)
}
