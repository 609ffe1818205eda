//! Router assembly.

use super::{error::ApiError, handlers, state::AppState};
use crate::task::ports::TaskRepository;
use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
};
use mockable::Clock;
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

/// Builds the task API router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/tasks` | [`handlers::list_tasks`] |
/// | POST | `/tasks` | [`handlers::create_task`] |
/// | GET | `/tasks/{id}` | [`handlers::get_task`] |
/// | PUT | `/tasks/{id}` | [`handlers::update_task`] |
/// | DELETE | `/tasks/{id}` | [`handlers::delete_task`] |
/// | PUT | `/tasks/{id}/status` | [`handlers::update_task_status`] |
/// | PUT | `/tasks/{id}/restore` | [`handlers::restore_task`] |
/// | DELETE | `/tasks/{id}/permanent` | [`handlers::permanently_delete_task`] |
///
/// Anything else answers `404 {"error": "Route not found"}`.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route(
            "/tasks/{id}/status",
            put(handlers::update_task_status::<R, C>),
        )
        .route("/tasks/{id}/restore", put(handlers::restore_task::<R, C>))
        .route(
            "/tasks/{id}/permanent",
            delete(handlers::permanently_delete_task::<R, C>),
        )
        .fallback(|| async { ApiError::route_not_found() })
        .method_not_allowed_fallback(|| async { ApiError::route_not_found() })
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "request handler panicked");
    ApiError::internal().into_response()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}
