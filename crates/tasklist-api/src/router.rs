//! Route definitions for the TaskList HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the logging middleware.
///
/// CORS and tracing layers are added by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(task_list_routes())
        .merge(todo_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: sign-up, sign-in, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route("/auth/me", get(handlers::auth::me))
}

/// Task list CRUD and collaborators
fn task_list_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/task-lists",
            get(handlers::task_list::my_task_lists).post(handlers::task_list::create_task_list),
        )
        .route(
            "/task-lists/{id}",
            get(handlers::task_list::get_task_list)
                .put(handlers::task_list::update_task_list)
                .delete(handlers::task_list::delete_task_list),
        )
        .route(
            "/task-lists/{id}/collaborators",
            post(handlers::task_list::add_collaborator),
        )
}

/// To-dos of a task list
fn todo_routes() -> Router<AppState> {
    Router::new().route(
        "/task-lists/{id}/todos",
        get(handlers::todo::list_to_dos).post(handlers::todo::create_to_do),
    )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
