use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::marks::adapters::inbound::responses::{DeleteResponse, error_response};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(student): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&student).await {
        Ok(outcome) => Json(DeleteResponse::from(outcome)).into_response(),
        Err(e) => error_response(student, e.into()),
    }
}
