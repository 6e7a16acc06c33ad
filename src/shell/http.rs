use axum::{Router, routing::get};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::modules::marks::use_cases::add_mark::inbound::http as add_http;
use crate::modules::marks::use_cases::delete_student::inbound::http as delete_http;
use crate::modules::marks::use_cases::list_marks::inbound::http as list_http;
use crate::modules::marks::use_cases::search_student::inbound::http as search_http;
use crate::shell::state::AppState;

/// Marks routes, with anything unmatched served from `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/add/{student}/{mark}", get(add_http::handle))
        .route("/search/{student}", get(search_http::handle))
        .route("/all", get(list_http::handle))
        .route("/delete/{student}", get(delete_http::handle))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
