use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::marks::adapters::inbound::responses::SearchResponse;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(student): Path<String>,
) -> impl IntoResponse {
    Json(SearchResponse::from(state.store.search(&student).await))
}
