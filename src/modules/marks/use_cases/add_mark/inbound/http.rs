use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::marks::adapters::inbound::responses::{MarkAddedResponse, error_response};
use crate::modules::marks::use_cases::add_mark::handler;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((student, mark)): Path<(String, String)>,
) -> impl IntoResponse {
    match handler::handle(&state.store, &student, &mark).await {
        Ok(record) => Json(MarkAddedResponse::from(record)).into_response(),
        Err(e) => {
            tracing::warn!(%student, %mark, error = %e, "add mark rejected");
            error_response(student, e)
        }
    }
}
