use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        calendar::{combined_calendar, stream_calendar},
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// No request timeout layer: `/calendar.ics` stays open for as long as the
/// sources keep producing, and cutting it off midway would truncate the
/// calendar. Outbound per-fetch timeouts on the shared client bound the
/// stream's lifetime instead.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/calendar.ics", get(stream_calendar))
        .route("/calendar/combined.ics", get(combined_calendar))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
