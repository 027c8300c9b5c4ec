use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::{handlers, state::AppState};

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/current-period", get(handlers::current_period))
        .route("/timetable", get(handlers::day_timetable))
        .route("/classes", get(handlers::class_list))
        .route("/day-schedule", get(handlers::today_schedule))
        .route("/full-week", get(handlers::week_schedule))
        .layer(cors)
        .with_state(state)
}
